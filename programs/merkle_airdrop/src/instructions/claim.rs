use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::utils::{hash_leaf, verify, SplTokenMinter, TokenMinter};
use crate::constants::*;
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * This instruction allows eligible users to claim their allocated tokens by providing
 * a valid merkle proof. The instruction verifies the proof, marks the claim record,
 * and mints the allocation to the claimant.
 *
 * Access Control: Any user with a valid merkle proof can claim their tokens
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The ledger holding the root and claim statistics
    /// - Will be modified to update total_claimed and total_claimers
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), token_mint.key().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// Claim record for this claimant
    /// - Derived from: ["claim", ledger_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), ledger.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token mint, the ledger PDA is its mint authority
    #[account(
        mut,
        token::token_program = token_program,
        constraint = token_mint.key() == ledger.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Claimant's token account to receive the tokens
    /// - Must be for the ledger's token mint and owned by the claimant
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The claimant attempting to claim tokens
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Verifies a claim and credits it through `minter`
 *
 * Validation runs before anything is written, and the record and statistics
 * are only committed after the minter succeeds, so every error leaves
 * `ledger` and `record` exactly as they were.
 *
 * Validation Process:
 * 1. Claim path is not paused
 * 2. Amount is non-zero
 * 3. Claimant has not claimed before
 * 4. Proof links hash_leaf(claimant, amount) to the current root
 */
pub fn apply_claim<M: TokenMinter>(
    ledger: &mut AirdropLedger,
    record: &mut ClaimRecord,
    claimant: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    minter: &mut M,
) -> Result<ClaimStats> {
    // ===== VALIDATION PHASE =====

    require!(!ledger.is_paused(), AirdropError::ContractPaused);
    require!(amount > 0, AirdropError::InvalidAmount);
    require!(!record.claimed, AirdropError::AlreadyClaimed);
    require!(ledger.merkle_root != [0; 32], AirdropError::MerkleRootNotSet);

    // ===== MERKLE PROOF VERIFICATION =====

    let leaf = hash_leaf(claimant, amount);
    require!(
        verify(proof, ledger.merkle_root, leaf),
        AirdropError::InvalidProof
    );

    let total_claimed = ledger
        .total_claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    let total_claimers = ledger
        .total_claimers
        .checked_add(1)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    // ===== INTERACTIONS PHASE (Mint) =====

    minter.mint(claimant, amount)?;

    // ===== EFFECTS PHASE (State Updates) =====

    record.claimed = true;
    record.amount = amount;
    ledger.total_claimed = total_claimed;
    ledger.total_claimers = total_claimers;

    Ok(ledger.claim_stats())
}

/**
 * Processes a token claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Allocation for the claimant as listed in the merkle tree
 * @param proof - Array of 32-byte sibling hashes from leaf to root
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let token_mint_key = ctx.accounts.token_mint.key();
    let ledger_bump = ctx.accounts.ledger.bump;
    let ledger_key = ctx.accounts.ledger.key();
    let claimant_key = ctx.accounts.claimant.key();

    // Prepare PDA signing seeds for the mint
    let seeds = &[
        LEDGER_SEED.as_bytes(),
        token_mint_key.as_ref(),
        &[ledger_bump],
    ];
    let signer = &[&seeds[..]];

    // Delayed AccountInfo acquisition, before the ledger is borrowed mutably
    let mut minter = SplTokenMinter {
        authority: ctx.accounts.ledger.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        destination_owner: ctx.accounts.claimant_token_account.owner,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let stats = apply_claim(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.claim_record,
        &claimant_key,
        amount,
        &proof,
        &mut minter,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(Claimed {
        ledger: ledger_key,
        claimant: claimant_key,
        amount,
        total_claimed: stats.total_claimed,
        total_claimers: stats.total_claimers,
    });

    Ok(())
}
