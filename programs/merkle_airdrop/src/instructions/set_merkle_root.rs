use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for replacing the merkle root
 *
 * This instruction allows an admin to publish a new whitelist root.
 *
 * Access Control: ADMIN role
 *
 * Business Logic:
 * - The merkle root defines who can claim tokens and how much
 * - Each leaf in the merkle tree represents a (claimant, amount) pair
 * - Claim records are not reset, an account that claimed under an old root
 *   stays claimed under the new one
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    /// The ledger account to update
    #[account(mut)]
    pub ledger: Account<'info, AirdropLedger>,

    /// Caller, must hold ADMIN
    pub admin: Signer<'info>,
}

/// Replaces the root and returns the previous one
pub fn apply_set_merkle_root(
    ledger: &mut AirdropLedger,
    caller: &Pubkey,
    merkle_root: [u8; 32],
) -> Result<[u8; 32]> {
    ledger.roles.check_role(Role::Admin, caller)?;

    // An empty merkle root would allow no valid claims
    require!(merkle_root != [0; 32], AirdropError::MerkleRootNotSet);

    Ok(std::mem::replace(&mut ledger.merkle_root, merkle_root))
}

/**
 * Sets the merkle root for claim verification
 *
 * @param ctx - The account context containing ledger and admin accounts
 * @param merkle_root - 32-byte hash representing the root of the merkle tree
 *
 * Merkle Tree Structure:
 * - Each leaf: sha256(claimant_pubkey + amount_le)
 * - Intermediate nodes: sha256(min(left, right) + max(left, right))
 * - Root: The final hash at the top of the tree
 */
pub fn handle_set_merkle_root(
    ctx: Context<SetMerkleRoot>,
    merkle_root: [u8; 32],
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let admin = ctx.accounts.admin.key();

    let previous_root = apply_set_merkle_root(ledger, &admin, merkle_root)?;

    emit_cpi!(MerkleRootUpdated {
        ledger: ledger.key(),
        admin,
        previous_root,
        new_root: merkle_root,
    });

    Ok(())
}
