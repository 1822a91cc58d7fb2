use anchor_lang::prelude::*;

declare_id!("G4AitHA4CRo2vNAqF68Tyvu9iWDV38hcE3kThWp9A9zG");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
#[cfg(not(target_os = "solana"))]
pub mod merkle_tree;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{ClaimStats, Role};

/**
 * Merkle Airdrop Program
 *
 * Distributes a fixed allocation of tokens to a predetermined set of recipients.
 * Only the root of a merkle tree built off-chain from the recipient list is stored;
 * each recipient redeems once by presenting a membership proof.
 *
 * Key Features:
 * - Merkle tree-based claim verification with sorted-pair hashing
 * - One claim per account per ledger, independent of later root replacements
 * - Role-gated administration (ADMIN, PAUSER, UPGRADER)
 * - Pausable claim path
 * - Emergency recovery of tokens sent to the ledger by mistake
 * - Claims mint directly, the ledger PDA is the mint authority
 *
 * Architecture:
 * - Ledger PDA: Stores root, pause state, statistics and role table
 * - Claim Record PDAs: Track whether each account has claimed
 *
 * Workflow:
 * 1. Mint authority initializes the ledger with the first root
 * 2. Mint authority is handed over to the ledger PDA
 * 3. Users claim tokens with valid merkle proofs
 * 4. Admin rotates the root or recovers stray tokens as needed
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates the ledger for a token mint
     *
     * @param ctx - Account context containing ledger, mint and authority accounts
     * @param merkle_root - Root of the first whitelist tree
     *
     * Access Control: Mint authority of `token_mint`; the caller becomes ADMIN, PAUSER and UPGRADER
     */
    pub fn initialize(ctx: Context<Initialize>, merkle_root: [u8; 32]) -> Result<()> {
        handle_initialize(ctx, merkle_root)
    }

    /**
     * Replaces the merkle root used for claim verification
     *
     * Access Control: ADMIN
     * Note: Claim records survive root replacement
     */
    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_merkle_root(ctx, merkle_root)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * @param amount - Allocation listed for the claimant in the merkle tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any user with valid merkle proof, once
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /**
     * Returns (total_claimed, total_claimers)
     *
     * Access Control: None
     */
    pub fn get_claim_stats(ctx: Context<GetClaimStats>) -> Result<ClaimStats> {
        handle_get_claim_stats(ctx)
    }

    /**
     * Sets the upgrade amount policy value
     *
     * Access Control: ADMIN
     */
    pub fn set_upgrade_amount(ctx: Context<SetUpgradeAmount>, upgrade_amount: u64) -> Result<()> {
        handle_set_upgrade_amount(ctx, upgrade_amount)
    }

    /**
     * Halts the claim path
     *
     * Access Control: PAUSER
     */
    pub fn pause(ctx: Context<SetPauseState>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Resumes the claim path
     *
     * Access Control: PAUSER
     */
    pub fn unpause(ctx: Context<SetPauseState>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Moves tokens held by the ledger to the admin
     *
     * @param amount - Raw amount of `withdraw_mint` tokens to recover
     *
     * Access Control: ADMIN
     */
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawTokens>, amount: u64) -> Result<()> {
        handle_emergency_withdraw(ctx, amount)
    }

    /// Access Control: holders of the role's administering role
    pub fn grant_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
        handle_grant_role(ctx, role, account)
    }

    /// Access Control: holders of the role's administering role
    pub fn revoke_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
        handle_revoke_role(ctx, role, account)
    }

    /// Access Control: `account` must be the signer
    pub fn renounce_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
        handle_renounce_role(ctx, role, account)
    }

    pub fn has_role(ctx: Context<HasRole>, role: Role, account: Pubkey) -> Result<bool> {
        handle_has_role(ctx, role, account)
    }

    /**
     * Approves a new program implementation
     *
     * Access Control: UPGRADER
     * Note: The loader-level code swap is performed separately by the upgrade authority
     */
    pub fn upgrade_to(ctx: Context<UpgradeTo>, new_implementation: Pubkey) -> Result<()> {
        handle_upgrade_to(ctx, new_implementation)
    }
}
