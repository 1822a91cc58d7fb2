use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, transfer_checked, MintTo, TransferChecked};

use crate::error::AirdropError;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Mint to a token account with PDA mint authority for both SPL Token and Token 2022
pub fn mint_token<'a>(
    authority: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    to: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint,
        to,
        authority,
    };

    mint_to(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
    )
}

/// Credits claimants on behalf of the ledger
///
/// A returned error aborts the claim before any claim bookkeeping is committed.
pub trait TokenMinter {
    fn mint(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Mints through the token program, signed by the ledger PDA
pub struct SplTokenMinter<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    /// Owner recorded in the destination token account
    pub destination_owner: Pubkey,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl TokenMinter for SplTokenMinter<'_, '_> {
    fn mint(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            self.destination_owner,
            *to,
            AirdropError::MintRecipientMismatch
        );

        mint_token(
            self.authority.clone(),
            self.mint.clone(),
            self.destination.clone(),
            self.token_program.clone(),
            amount,
            self.signer_seeds,
        )
    }
}
