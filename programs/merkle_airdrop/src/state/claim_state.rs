use anchor_lang::prelude::*;

/**
 * Individual claim record account
 *
 * Tracks whether a claimant has redeemed their allocation from a ledger.
 * The record is keyed by (ledger, claimant) only, so replacing the merkle
 * root never makes a claimant eligible again.
 *
 * Derivation: ["claim", ledger_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (using init_if_needed)
 * 2. Marked claimed when the claim succeeds, never unset
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Whether this claimant has redeemed
    pub claimed: bool,

    /// Amount minted by the successful claim
    pub amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
