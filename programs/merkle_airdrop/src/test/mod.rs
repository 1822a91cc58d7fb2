pub mod test_admin;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::instructions::apply_initialize;
use crate::merkle_tree::{MerkleTree, WhitelistEntry};
use crate::state::AirdropLedger;
use crate::utils::TokenMinter;

/// Deterministic test account
pub fn account(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn token_mint() -> Pubkey {
    account(0xEE)
}

pub fn admin() -> Pubkey {
    account(0xAD)
}

/// Ledger initialized by `admin()` with `root`
pub fn ledger_with_root(root: [u8; 32]) -> AirdropLedger {
    let mut ledger = AirdropLedger::default();
    apply_initialize(&mut ledger, 254, token_mint(), Some(admin()), admin(), root)
        .expect("initialize should succeed");
    ledger
}

pub fn tree_of(entries: &[WhitelistEntry]) -> MerkleTree {
    MerkleTree::build(entries).expect("non-empty whitelist")
}

/// Asserts that `result` failed with `expected`
pub fn assert_airdrop_error<T: std::fmt::Debug>(result: Result<T>, expected: AirdropError) {
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Minter that records every credit instead of calling the token program
#[derive(Default)]
pub struct RecordingMinter {
    pub minted: Vec<(Pubkey, u64)>,
    pub fail: bool,
}

impl RecordingMinter {
    pub fn failing() -> Self {
        Self {
            minted: Vec::new(),
            fail: true,
        }
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.minted
            .iter()
            .filter(|(to, _)| to == owner)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl TokenMinter for RecordingMinter {
    fn mint(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.fail {
            return Err(ProgramError::InvalidAccountData.into());
        }
        self.minted.push((*to, amount));
        Ok(())
    }
}
