use anyhow::{bail, Context, Result};
use clap::Parser;
use merkle_airdrop::merkle_tree::WhitelistEntry;
use merkle_airdrop::utils::verify;
use std::path::PathBuf;

use crate::artifacts::{
    decode_hash, parse_address, read_json, ProofArtifact, ProofRecord, RootArtifact,
};

#[derive(Parser, Debug)]
#[command(about = "Check an account's proof against the published root", long_about = None)]
pub struct Cli {
    /// Root artifact written by `build`
    #[arg(short, long, default_value = "root.json")]
    pub root: PathBuf,

    /// Proofs artifact written by `build`
    #[arg(short, long, default_value = "proofs.json")]
    pub proofs: PathBuf,

    /// Account to check (base58 or hex)
    #[arg(short, long)]
    pub address: String,
}

/// Re-derives the leaf from a published record and folds its proof up to `root`.
pub fn check_record(record: &ProofRecord, root: [u8; 32]) -> Result<bool> {
    let address = parse_address(&record.address)?;
    let amount = record
        .amount
        .parse::<u64>()
        .with_context(|| format!("Invalid amount {:?}", record.amount))?;
    let proof = record
        .proof
        .iter()
        .map(|hash| decode_hash(hash))
        .collect::<Result<Vec<_>>>()
        .context("Invalid proof element")?;

    Ok(verify(&proof, root, WhitelistEntry::new(address, amount).leaf()))
}

pub fn run(cli: &Cli) -> Result<()> {
    let address = parse_address(&cli.address)?;

    println!("Reading root from {:?}...", cli.root);
    let root_artifact: RootArtifact = read_json(&cli.root)?;
    let root = decode_hash(&root_artifact.root).context("Invalid root in root artifact")?;
    println!("Merkle root: {} (generated {})", root_artifact.root, root_artifact.timestamp);

    println!("Reading proofs from {:?}...", cli.proofs);
    let proofs: ProofArtifact = read_json(&cli.proofs)?;
    let Some(record) = proofs.get(&address.to_string()) else {
        bail!("Address {} is not in the proofs file", address);
    };

    if !check_record(record, root)? {
        bail!("Proof for {} does not verify against {}", address, root_artifact.root);
    }

    println!(
        "Proof valid: {} may claim {} with {} proof elements",
        address,
        record.amount,
        record.proof.len()
    );
    Ok(())
}
