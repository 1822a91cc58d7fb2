use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for recovering tokens held by the ledger
 *
 * Tokens sent to a ledger-owned token account by mistake can be moved to an
 * admin's token account. The token being recovered is identified by its mint
 * and need not be the airdrop mint.
 *
 * Access Control: ADMIN role
 */
#[event_cpi]
#[derive(Accounts)]
pub struct EmergencyWithdrawTokens<'info> {
    /// The ledger, signs the transfer as token account authority
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), ledger.token_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// Mint of the token being recovered
    #[account(
        token::token_program = token_program,
    )]
    pub withdraw_mint: InterfaceAccount<'info, Mint>,

    /// Ledger-owned token account holding the stray tokens
    #[account(
        mut,
        token::mint = withdraw_mint,
        token::authority = ledger,
        token::token_program = token_program,
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Admin's token account receiving the recovered tokens
    #[account(
        mut,
        token::mint = withdraw_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Caller, must hold ADMIN
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Authorization and amount checks run before any transfer
pub fn check_emergency_withdraw(
    ledger: &AirdropLedger,
    caller: &Pubkey,
    amount: u64,
    available: u64,
) -> Result<()> {
    ledger.roles.check_role(Role::Admin, caller)?;
    require!(amount > 0, AirdropError::InvalidAmount);
    require!(available >= amount, AirdropError::InsufficientBalance);
    Ok(())
}

/**
 * Transfers `amount` of the named token from the ledger to the admin
 *
 * @param ctx - The account context containing ledger, token accounts and admin
 * @param amount - Raw token amount to recover, must be non-zero
 */
pub fn handle_emergency_withdraw(ctx: Context<EmergencyWithdrawTokens>, amount: u64) -> Result<()> {
    let ledger = &ctx.accounts.ledger;

    check_emergency_withdraw(
        ledger,
        &ctx.accounts.admin.key(),
        amount,
        ctx.accounts.source_token_account.amount,
    )?;

    // Prepare PDA signing seeds for token transfer
    let seeds = &[
        LEDGER_SEED.as_bytes(),
        ledger.token_mint.as_ref(),
        &[ledger.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.ledger.to_account_info(),
        ctx.accounts.source_token_account.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        ctx.accounts.withdraw_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.withdraw_mint.decimals,
        Some(signer),
    )?;

    msg!("Emergency withdraw of {} from {}", amount, ctx.accounts.withdraw_mint.key());

    emit_cpi!(EmergencyWithdraw {
        ledger: ledger.key(),
        token_mint: ctx.accounts.withdraw_mint.key(),
        amount,
    });

    Ok(())
}
