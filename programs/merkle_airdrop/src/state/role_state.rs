use anchor_lang::prelude::*;
use std::fmt;

use crate::constants::MAX_ROLE_MEMBERS;
use crate::error::AirdropError;

/// Named capability checked before gated instructions
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Replaces the root, sets policy, recovers tokens, administers roles
    Admin,
    /// Pauses and resumes the claim path
    Pauser,
    /// Approves new program implementations
    Upgrader,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Pauser, Role::Upgrader];

    /// Role whose holders may grant and revoke `self`
    pub fn admin_role(self) -> Role {
        Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "ADMIN",
            Role::Pauser => "PAUSER",
            Role::Upgrader => "UPGRADER",
        };
        f.write_str(name)
    }
}

/**
 * Role membership table stored inside the ledger account
 *
 * Each role holds a bounded list of members. Every gated instruction calls
 * `check_role` before touching state.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct RoleRegistry {
    pub admins: Vec<Pubkey>,
    pub pausers: Vec<Pubkey>,
    pub upgraders: Vec<Pubkey>,
}

impl RoleRegistry {
    /// Serialized size with every role at capacity
    /// - Each vector carries a 4-byte Borsh length prefix
    pub const LEN: usize = 3 * (4 + 32 * MAX_ROLE_MEMBERS);

    /// Registry with `account` seeded into every role
    pub fn seeded(account: Pubkey) -> Self {
        Self {
            admins: vec![account],
            pausers: vec![account],
            upgraders: vec![account],
        }
    }

    pub fn members(&self, role: Role) -> &[Pubkey] {
        match role {
            Role::Admin => &self.admins,
            Role::Pauser => &self.pausers,
            Role::Upgrader => &self.upgraders,
        }
    }

    fn members_mut(&mut self, role: Role) -> &mut Vec<Pubkey> {
        match role {
            Role::Admin => &mut self.admins,
            Role::Pauser => &mut self.pausers,
            Role::Upgrader => &mut self.upgraders,
        }
    }

    pub fn has_role(&self, role: Role, account: &Pubkey) -> bool {
        self.members(role).contains(account)
    }

    /// Fails with `AccessControlUnauthorized` naming the missing role
    pub fn check_role(&self, role: Role, account: &Pubkey) -> Result<()> {
        if self.has_role(role, account) {
            return Ok(());
        }
        msg!("AccessControlUnauthorized: {} is missing role {}", account, role);
        Err(error!(AirdropError::AccessControlUnauthorized).with_values((role, *account)))
    }

    /// Adds `account` to `role`, returns false when it was already a member
    pub fn grant(&mut self, role: Role, account: Pubkey) -> Result<bool> {
        if self.has_role(role, &account) {
            return Ok(false);
        }
        let members = self.members_mut(role);
        require!(
            members.len() < MAX_ROLE_MEMBERS,
            AirdropError::RoleCapacityExceeded
        );
        members.push(account);
        Ok(true)
    }

    /// Removes `account` from `role`, returns false when it was not a member
    pub fn revoke(&mut self, role: Role, account: &Pubkey) -> bool {
        let members = self.members_mut(role);
        let before = members.len();
        members.retain(|member| member != account);
        members.len() != before
    }
}
