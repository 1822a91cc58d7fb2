use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the upgrade amount policy
 *
 * The upgrade amount is a threshold read by external tooling. Claims never
 * consult it.
 *
 * Access Control: ADMIN role
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetUpgradeAmount<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AirdropLedger>,

    /// Caller, must hold ADMIN
    pub admin: Signer<'info>,
}

/// Stores the new policy value and returns the previous one
pub fn apply_set_upgrade_amount(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    upgrade_amount: u64,
) -> Result<u64> {
    ledger.roles.check_role(Role::Admin, caller)?;
    require!(
        upgrade_amount <= MAX_UPGRADE_AMOUNT,
        AirdropError::UpgradeAmountTooHigh
    );

    Ok(std::mem::replace(&mut ledger.upgrade_amount, upgrade_amount))
}

pub fn handle_set_upgrade_amount(ctx: Context<SetUpgradeAmount>, upgrade_amount: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    let previous_amount = apply_set_upgrade_amount(ledger, &ctx.accounts.admin.key(), upgrade_amount)?;

    emit_cpi!(UpgradeAmountUpdated {
        ledger: ledger.key(),
        previous_amount,
        new_amount: upgrade_amount,
    });

    Ok(())
}
