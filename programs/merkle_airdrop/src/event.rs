use anchor_lang::prelude::*;

use crate::state::Role;

/// Event emitted when a ledger is initialized
#[event]
pub struct LedgerInitialized {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Token mint credited on claims
    pub token_mint: Pubkey,
    /// Account seeded into every role
    pub admin: Pubkey,
    /// Initial merkle root
    pub merkle_root: [u8; 32],
}

/// Event emitted when the merkle root is replaced
#[event]
pub struct MerkleRootUpdated {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Admin who replaced the root
    pub admin: Pubkey,
    /// Root in effect before this update
    pub previous_root: [u8; 32],
    /// Root in effect after this update
    pub new_root: [u8; 32],
}

/// Event emitted when tokens are claimed
#[event]
pub struct Claimed {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount minted to the claimant
    pub amount: u64,
    /// Total amount claimed from the ledger by all users
    pub total_claimed: u64,
    /// Number of accounts that have claimed
    pub total_claimers: u64,
}

/// Event emitted when the claim path is paused
#[event]
pub struct Paused {
    pub ledger: Pubkey,
    pub account: Pubkey,
}

/// Event emitted when the claim path is resumed
#[event]
pub struct Unpaused {
    pub ledger: Pubkey,
    pub account: Pubkey,
}

/// Event emitted when an admin recovers tokens held by the ledger
#[event]
pub struct EmergencyWithdraw {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Mint of the recovered token
    pub token_mint: Pubkey,
    /// Amount transferred to the admin
    pub amount: u64,
}

/// Event emitted when a role is granted
#[event]
pub struct RoleGranted {
    pub ledger: Pubkey,
    pub role: Role,
    pub account: Pubkey,
    /// Account that performed the grant
    pub sender: Pubkey,
}

/// Event emitted when a role is revoked or renounced
#[event]
pub struct RoleRevoked {
    pub ledger: Pubkey,
    pub role: Role,
    pub account: Pubkey,
    /// Account that performed the revocation
    pub sender: Pubkey,
}

/// Event emitted when the upgrade amount policy changes
#[event]
pub struct UpgradeAmountUpdated {
    pub ledger: Pubkey,
    pub previous_amount: u64,
    pub new_amount: u64,
}

/// Event emitted when a new implementation is approved
#[event]
pub struct Upgraded {
    pub ledger: Pubkey,
    /// Upgrader who approved the implementation
    pub upgrader: Pubkey,
    pub implementation: Pubkey,
}
