use anchor_lang::prelude::*;

use super::role_state::RoleRegistry;

/// Circuit breaker state for the claim path
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PauseState {
    #[default]
    Active,
    Paused,
}

/// Aggregate claim statistics returned by `get_claim_stats`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimStats {
    pub total_claimed: u64,
    pub total_claimers: u64,
}

/**
 * Main airdrop ledger account
 *
 * Holds the published merkle root, the circuit breaker, aggregate claim
 * statistics and the role table. It is the only account mutated by the
 * administrative instructions.
 *
 * Derivation: ["ledger", token_mint]
 *
 * Lifecycle:
 * 1. Created by initialize with the caller seeded into every role
 * 2. Root, pause state and policy values changed by role holders
 * 3. Statistics incremented by every successful claim
 *
 * Layout Notes:
 * - Fields are append-only across program upgrades
 * - New fields consume `reserved` before the account is reallocated
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct AirdropLedger {
    /// Layout version written at initialization
    pub layout_version: u8,

    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing mint CPIs
    pub bump: u8,

    /// Token mint credited on claims
    /// - The ledger PDA must be its mint authority
    pub token_mint: Pubkey,

    /// Merkle root for claim verification
    /// - Never all zeros once initialized
    pub merkle_root: [u8; 32],

    /// Claim path circuit breaker
    pub pause_state: PauseState,

    /// Sum of amounts over all successful claims
    pub total_claimed: u64,

    /// Number of accounts that have claimed
    pub total_claimers: u64,

    /// Policy threshold consumed by external tooling
    pub upgrade_amount: u64,

    /// Last implementation approved through upgrade_to
    pub implementation: Pubkey,

    /// Role membership table
    pub roles: RoleRegistry,

    /// Padding reserved for future fields
    pub reserved: [[u8; 32]; 2],
}

impl AirdropLedger {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + Borsh field sizes
    pub const LEN: usize = 8 // discriminator
        + 1 // layout_version
        + 1 // bump
        + 32 // token_mint
        + 32 // merkle_root
        + 1 // pause_state
        + 8 // total_claimed
        + 8 // total_claimers
        + 8 // upgrade_amount
        + 32 // implementation
        + RoleRegistry::LEN
        + 64; // reserved

    pub fn is_paused(&self) -> bool {
        self.pause_state == PauseState::Paused
    }

    pub fn claim_stats(&self) -> ClaimStats {
        ClaimStats {
            total_claimed: self.total_claimed,
            total_claimers: self.total_claimers,
        }
    }
}
