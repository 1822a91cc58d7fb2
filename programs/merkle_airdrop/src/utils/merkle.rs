use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

/// Leaf hash for a (claimant, amount) whitelist entry
/// - sha256(claimant_pubkey || amount_le_bytes)
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]).to_bytes()
}

/// Parent hash of two siblings, smaller digest first
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` onto `leaf` and returns the implied root
pub fn compute_root(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling))
}

/// Returns true when `proof` links `leaf` to `root`
/// - An empty proof only verifies when the root is the leaf itself
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    compute_root(proof, leaf) == root
}
