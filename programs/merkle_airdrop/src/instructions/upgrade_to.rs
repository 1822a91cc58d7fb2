use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for approving a new program implementation
 *
 * Records which implementation an upgrader approved. The code swap itself
 * is performed by the program's upgrade authority through the loader; this
 * instruction only touches `implementation`, never claims, statistics,
 * roles, root or pause state.
 *
 * Access Control: UPGRADER role
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpgradeTo<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AirdropLedger>,

    /// Caller, must hold UPGRADER
    pub upgrader: Signer<'info>,
}

pub fn apply_upgrade_to(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    new_implementation: Pubkey,
) -> Result<()> {
    ledger.roles.check_role(Role::Upgrader, caller)?;
    require!(
        new_implementation != Pubkey::default(),
        AirdropError::InvalidImplementation
    );

    ledger.implementation = new_implementation;
    Ok(())
}

pub fn handle_upgrade_to(ctx: Context<UpgradeTo>, new_implementation: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let upgrader = ctx.accounts.upgrader.key();

    apply_upgrade_to(ledger, &upgrader, new_implementation)?;

    emit_cpi!(Upgraded {
        ledger: ledger.key(),
        upgrader,
        implementation: new_implementation,
    });

    Ok(())
}
