use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing an airdrop ledger
 *
 * Creates the ledger PDA for a token mint and publishes the first merkle root.
 * The caller becomes the first holder of every role.
 *
 * Only the current mint authority of `token_mint` may create its ledger.
 * It then hands mint authority to the ledger PDA before claims can succeed.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The ledger account (PDA)
    /// - Derived from: ["ledger", token_mint]
    #[account(
        init,
        payer = authority,
        space = AirdropLedger::LEN,
        seeds = [LEDGER_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// The token mint credited on claims
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Initial admin, pauser and upgrader
    /// - Must be the mint authority of `token_mint`
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Writes the initial ledger state
/// - `mint_authority` is the authority currently recorded in `token_mint`
pub fn apply_initialize(
    ledger: &mut AirdropLedger,
    bump: u8,
    token_mint: Pubkey,
    mint_authority: Option<Pubkey>,
    authority: Pubkey,
    merkle_root: [u8; 32],
) -> Result<()> {
    require!(
        token_mint != Pubkey::default(),
        AirdropError::InvalidTokenAddress
    );
    require!(
        mint_authority == Some(authority),
        AirdropError::MintAuthorityMismatch
    );
    require!(merkle_root != [0; 32], AirdropError::MerkleRootNotSet);

    *ledger = AirdropLedger {
        layout_version: LEDGER_LAYOUT_VERSION,
        bump,
        token_mint,
        merkle_root,
        roles: RoleRegistry::seeded(authority),
        ..AirdropLedger::default()
    };

    Ok(())
}

/**
 * Initializes a ledger for a token mint
 *
 * @param ctx - The account context containing ledger, mint and authority accounts
 * @param merkle_root - Root of the first whitelist tree, must not be all zeros
 */
pub fn handle_initialize(ctx: Context<Initialize>, merkle_root: [u8; 32]) -> Result<()> {
    let mint_authority = match ctx.accounts.token_mint.mint_authority {
        COption::Some(key) => Some(key),
        COption::None => None,
    };
    let ledger = &mut ctx.accounts.ledger;

    apply_initialize(
        ledger,
        ctx.bumps.ledger,
        ctx.accounts.token_mint.key(),
        mint_authority,
        ctx.accounts.authority.key(),
        merkle_root,
    )?;

    emit_cpi!(LedgerInitialized {
        ledger: ledger.key(),
        token_mint: ledger.token_mint,
        admin: ctx.accounts.authority.key(),
        merkle_root,
    });

    Ok(())
}
