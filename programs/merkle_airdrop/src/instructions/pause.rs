use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context shared by pause and unpause
 *
 * Access Control: PAUSER role
 *
 * Business Logic:
 * - Only the claim path is halted, administrative instructions keep working
 * - Repeating the current state is rejected to surface operator mistakes
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPauseState<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AirdropLedger>,

    /// Caller, must hold PAUSER
    pub pauser: Signer<'info>,
}

pub fn apply_pause(ledger: &mut AirdropLedger, caller: &Pubkey) -> Result<()> {
    ledger.roles.check_role(Role::Pauser, caller)?;
    require!(!ledger.is_paused(), AirdropError::AlreadyPaused);

    ledger.pause_state = PauseState::Paused;
    Ok(())
}

pub fn apply_unpause(ledger: &mut AirdropLedger, caller: &Pubkey) -> Result<()> {
    ledger.roles.check_role(Role::Pauser, caller)?;
    require!(ledger.is_paused(), AirdropError::NotPaused);

    ledger.pause_state = PauseState::Active;
    Ok(())
}

pub fn handle_pause(ctx: Context<SetPauseState>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let pauser = ctx.accounts.pauser.key();

    apply_pause(ledger, &pauser)?;
    msg!("Claims paused by {}", pauser);

    emit_cpi!(Paused {
        ledger: ledger.key(),
        account: pauser,
    });

    Ok(())
}

pub fn handle_unpause(ctx: Context<SetPauseState>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let pauser = ctx.accounts.pauser.key();

    apply_unpause(ledger, &pauser)?;
    msg!("Claims resumed by {}", pauser);

    emit_cpi!(Unpaused {
        ledger: ledger.key(),
        account: pauser,
    });

    Ok(())
}
