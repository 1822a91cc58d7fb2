//! Off-chain merkle tree builder for whitelist distributions.
//!
//! Leaves are sorted and de-duplicated before the levels are formed, and every
//! parent uses the same sorted-pair hash as on-chain verification. A level
//! with an odd node count carries its last node up unchanged. The resulting
//! root depends only on the set of entries, not on their order.

use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::utils::merkle::{hash_leaf, hash_pair};

/// One eligible (claimant, amount) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WhitelistEntry {
    pub address: Pubkey,
    pub amount: u64,
}

impl WhitelistEntry {
    pub fn new(address: Pubkey, amount: u64) -> Self {
        Self { address, amount }
    }

    pub fn leaf(&self) -> [u8; 32] {
        hash_leaf(&self.address, self.amount)
    }
}

#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// levels[0] holds the sorted leaves, the last level holds the root
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    pub fn build(entries: &[WhitelistEntry]) -> Result<Self> {
        require!(!entries.is_empty(), AirdropError::EmptyWhitelist);

        let mut leaves: Vec<[u8; 32]> = entries.iter().map(WhitelistEntry::leaf).collect();
        leaves.sort_unstable();
        leaves.dedup();

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next_level: Vec<[u8; 32]> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(next_level);
        }

        Ok(Self { levels })
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of levels above the leaves
    pub fn height(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn proof_for(&self, entry: &WhitelistEntry) -> Result<Vec<[u8; 32]>> {
        let leaf = entry.leaf();
        let mut index = self.levels[0]
            .binary_search(&leaf)
            .map_err(|_| error!(AirdropError::EntryNotFound))?;

        let mut proof = Vec::with_capacity(self.height());
        for level in &self.levels[..self.height()] {
            // A carried-up node has no sibling at this level
            if let Some(sibling) = level.get(index ^ 1) {
                proof.push(*sibling);
            }
            index /= 2;
        }

        Ok(proof)
    }
}
