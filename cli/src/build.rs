use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use merkle_airdrop::merkle_tree::{MerkleTree, WhitelistEntry};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::artifacts::{
    encode_hash, parse_address, parse_amount, read_json, write_file_atomic, ProofArtifact,
    ProofRecord, RootArtifact, WhitelistRecord,
};

#[derive(Parser, Debug)]
#[command(about = "Build the merkle root and proofs from a whitelist", long_about = None)]
pub struct Cli {
    /// JSON array of {"address", "amount"} records
    #[arg(short, long)]
    pub whitelist: PathBuf,

    /// Output file for the root artifact
    #[arg(short, long, default_value = "root.json")]
    pub root_output: PathBuf,

    /// Output file for the per-account proofs
    #[arg(short, long, default_value = "proofs.json")]
    pub proofs_output: PathBuf,
}

/// Validates the whitelist and resolves it to tree entries.
///
/// Repeated rows for the same address collapse into one entry when the
/// amounts agree; conflicting amounts are an error.
pub fn collect_entries(records: &[WhitelistRecord]) -> Result<Vec<WhitelistEntry>> {
    let mut by_address = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let address = parse_address(&record.address)
            .with_context(|| format!("Whitelist entry {} has a bad address", index))?;
        let amount = parse_amount(&record.amount)
            .with_context(|| format!("Whitelist entry {} has a bad amount", index))?;

        match by_address.insert(address, amount) {
            Some(previous) if previous != amount => bail!(
                "Address {} is listed with conflicting amounts {} and {}",
                address,
                previous,
                amount
            ),
            Some(_) => eprintln!("Warning: duplicate whitelist entry for {} ignored", address),
            None => {}
        }
    }

    Ok(by_address
        .into_iter()
        .map(|(address, amount)| WhitelistEntry::new(address, amount))
        .collect())
}

pub fn build_tree(entries: &[WhitelistEntry]) -> Result<MerkleTree> {
    MerkleTree::build(entries).map_err(|e| anyhow::anyhow!("Failed to build tree: {}", e))
}

pub fn collect_proofs(tree: &MerkleTree, entries: &[WhitelistEntry]) -> Result<ProofArtifact> {
    let mut proofs = ProofArtifact::new();
    for entry in entries {
        let proof = tree
            .proof_for(entry)
            .map_err(|e| anyhow::anyhow!("No proof for {}: {}", entry.address, e))?;
        proofs.insert(
            entry.address.to_string(),
            ProofRecord {
                address: entry.address.to_string(),
                amount: entry.amount.to_string(),
                proof: proof.iter().map(encode_hash).collect(),
            },
        );
    }
    Ok(proofs)
}

pub fn run(cli: &Cli) -> Result<()> {
    println!("Reading whitelist from {:?}...", cli.whitelist);
    let records: Vec<WhitelistRecord> = read_json(&cli.whitelist)?;
    let entries = collect_entries(&records)?;
    println!("Total accounts: {}", entries.len());

    println!("Building Merkle tree...");
    let tree = build_tree(&entries)?;
    let root = encode_hash(&tree.root());
    println!("Merkle root: {}", root);
    println!("Tree height: {}", tree.height());

    let proofs = collect_proofs(&tree, &entries)?;

    let root_artifact = RootArtifact {
        root,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let root_json =
        serde_json::to_string_pretty(&root_artifact).context("Failed to serialize root")?;
    let proofs_json =
        serde_json::to_string_pretty(&proofs).context("Failed to serialize proofs")?;

    println!("Writing root to {:?}...", cli.root_output);
    write_file_atomic(&cli.root_output, &root_json).context("Failed to write root file")?;
    println!("Writing proofs to {:?}...", cli.proofs_output);
    write_file_atomic(&cli.proofs_output, &proofs_json).context("Failed to write proofs file")?;

    println!("Done!");
    Ok(())
}
