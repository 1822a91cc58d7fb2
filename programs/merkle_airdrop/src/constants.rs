use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Values shared by the airdrop ledger instructions: PDA seeds, role capacity,
 * policy ceilings and the account layout version.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for ledger PDA derivation
/// - Used in: ["ledger", token_mint]
/// - One ledger per mint, the ledger PDA is the mint authority
pub const LEDGER_SEED: &str = "ledger";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", ledger_key, claimant_key]
/// - Not scoped by merkle root, a claimant redeems once per ledger
pub const CLAIM_SEED: &str = "claim";

/// ===== ACCESS CONTROL CONSTANTS =====

/// Maximum number of accounts holding a single role
pub const MAX_ROLE_MEMBERS: usize = 5;

/// ===== POLICY CONSTANTS =====

/// Ceiling for the upgrade amount policy value
/// - 1,000,000 tokens at 9 decimals
pub const MAX_UPGRADE_AMOUNT: u64 = 1_000_000 * 1_000_000_000;

/// ===== LAYOUT CONSTANTS =====

/// Layout version written into every ledger account
/// - Bumped only when fields are appended
pub const LEDGER_LAYOUT_VERSION: u8 = 1;
