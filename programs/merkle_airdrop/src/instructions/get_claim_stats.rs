use anchor_lang::prelude::*;
use crate::state::*;

/**
 * Account context for reading claim statistics
 *
 * Read-only, no authorization required.
 */
#[derive(Accounts)]
pub struct GetClaimStats<'info> {
    pub ledger: Account<'info, AirdropLedger>,
}

/// Returns (total_claimed, total_claimers) through program return data
pub fn handle_get_claim_stats(ctx: Context<GetClaimStats>) -> Result<ClaimStats> {
    Ok(ctx.accounts.ledger.claim_stats())
}
