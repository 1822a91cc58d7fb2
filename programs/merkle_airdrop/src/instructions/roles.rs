use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for role administration
 *
 * Shared by grant_role, revoke_role and renounce_role. Grant and revoke
 * require the caller to hold the administering role of the target role;
 * renounce only lets callers drop their own membership.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateRole<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AirdropLedger>,

    pub authority: Signer<'info>,
}

/// Account context for the read-only role lookup
#[derive(Accounts)]
pub struct HasRole<'info> {
    pub ledger: Account<'info, AirdropLedger>,
}

/// Returns true when the registry changed
pub fn apply_grant_role(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    role: Role,
    account: Pubkey,
) -> Result<bool> {
    ledger.roles.check_role(role.admin_role(), caller)?;
    ledger.roles.grant(role, account)
}

/// Returns true when the registry changed
pub fn apply_revoke_role(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    role: Role,
    account: &Pubkey,
) -> Result<bool> {
    ledger.roles.check_role(role.admin_role(), caller)?;
    Ok(ledger.roles.revoke(role, account))
}

/// Returns true when the registry changed
pub fn apply_renounce_role(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    role: Role,
    account: &Pubkey,
) -> Result<bool> {
    require_keys_eq!(*account, *caller, AirdropError::BadRenounceConfirmation);
    Ok(ledger.roles.revoke(role, account))
}

pub fn handle_grant_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let sender = ctx.accounts.authority.key();

    if apply_grant_role(ledger, &sender, role, account)? {
        msg!("Granted {} to {}", role, account);
        emit_cpi!(RoleGranted {
            ledger: ledger.key(),
            role,
            account,
            sender,
        });
    }

    Ok(())
}

pub fn handle_revoke_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let sender = ctx.accounts.authority.key();

    if apply_revoke_role(ledger, &sender, role, &account)? {
        msg!("Revoked {} from {}", role, account);
        emit_cpi!(RoleRevoked {
            ledger: ledger.key(),
            role,
            account,
            sender,
        });
    }

    Ok(())
}

pub fn handle_renounce_role(ctx: Context<UpdateRole>, role: Role, account: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let sender = ctx.accounts.authority.key();

    if apply_renounce_role(ledger, &sender, role, &account)? {
        msg!("{} renounced {}", account, role);
        emit_cpi!(RoleRevoked {
            ledger: ledger.key(),
            role,
            account,
            sender,
        });
    }

    Ok(())
}

pub fn handle_has_role(ctx: Context<HasRole>, role: Role, account: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.ledger.roles.has_role(role, &account))
}
