use anchor_lang::prelude::Pubkey;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// One whitelist row as read from the input file.
///
/// `amount` is accepted either as a JSON number or as a decimal string,
/// since large allocations are usually written as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct WhitelistRecord {
    pub address: String,
    pub amount: AmountField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(u64),
    Text(String),
}

/// `root.json`: the published root and when it was generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootArtifact {
    pub root: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    pub address: String,
    pub amount: String,
    pub proof: Vec<String>,
}

/// `proofs.json`: base58 address -> proof record
pub type ProofArtifact = BTreeMap<String, ProofRecord>;

/// Parses an account address.
///
/// Accepts base58 (the usual Solana form) or 64 hex characters with or
/// without a "0x" prefix. The all-zero key is rejected.
pub fn parse_address(addr_str: &str) -> Result<Pubkey> {
    let trimmed = addr_str.trim();
    let hex_body = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let address = if hex_body.len() == 64 && hex_body.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_body, &mut bytes)
            .map_err(|e| anyhow::anyhow!("Invalid hex encoding: {}", e))?;
        Pubkey::new_from_array(bytes)
    } else {
        Pubkey::from_str(trimmed)
            .map_err(|e| anyhow::anyhow!("Invalid address {:?}: {}", trimmed, e))?
    };

    if address == Pubkey::default() {
        bail!("Zero address not allowed");
    }
    Ok(address)
}

pub fn parse_amount(amount: &AmountField) -> Result<u64> {
    let value = match amount {
        AmountField::Number(value) => *value,
        AmountField::Text(text) => text
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid amount {:?}", text))?,
    };
    if value == 0 {
        bail!("Amount must be greater than zero");
    }
    Ok(value)
}

pub fn encode_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

pub fn decode_hash(hash_str: &str) -> Result<[u8; 32]> {
    let trimmed = hash_str.trim();
    let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if cleaned.len() != 64 {
        bail!(
            "Invalid hash length: expected 64 hex chars, got {}",
            cleaned.len()
        );
    }
    let mut hash = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut hash)
        .map_err(|e| anyhow::anyhow!("Invalid hex encoding: {}", e))?;
    Ok(hash)
}

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {:?}", path))
}

/// Writes `contents` next to `path` first and renames it into place, so a
/// reader never observes a half-written artifact.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(contents.as_bytes())
        .context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    std::fs::rename(&temp_path, path).context("Failed to move temp file to output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_base58() {
        let addr = "3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs";
        let result = parse_address(addr).unwrap();
        assert_eq!(result.to_string(), addr);
    }

    #[test]
    fn test_parse_address_hex_with_and_without_prefix() {
        let body = "ab".repeat(32);
        let with_prefix = parse_address(&format!("0x{}", body)).unwrap();
        let without_prefix = parse_address(&body).unwrap();
        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix.to_bytes(), [0xab; 32]);
    }

    #[test]
    fn test_parse_address_rejects_invalid() {
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("not-an-address").is_err());
        assert!(parse_address(&"0".repeat(64)).is_err());
        assert!(parse_address("11111111111111111111111111111111").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&AmountField::Number(1000)).unwrap(), 1000);
        assert_eq!(
            parse_amount(&AmountField::Text("18446744073709551615".into())).unwrap(),
            u64::MAX
        );
        assert!(parse_amount(&AmountField::Number(0)).is_err());
        assert!(parse_amount(&AmountField::Text("-5".into())).is_err());
        assert!(parse_amount(&AmountField::Text("18446744073709551616".into())).is_err());
        assert!(parse_amount(&AmountField::Text("1.5".into())).is_err());
    }

    #[test]
    fn test_whitelist_accepts_string_and_number_amounts() {
        let json = r#"[
            {"address": "3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs", "amount": "1000"},
            {"address": "8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx", "amount": 1200}
        ]"#;
        let records: Vec<WhitelistRecord> = serde_json::from_str(json).unwrap();
        let amounts: Vec<u64> = records
            .iter()
            .map(|record| parse_amount(&record.amount).unwrap())
            .collect();
        assert_eq!(amounts, vec![1000, 1200]);
    }

    #[test]
    fn test_hash_hex_encoding() {
        let hash = [0x5a; 32];
        let encoded = encode_hash(&hash);
        assert!(encoded.starts_with("0x"));
        assert_eq!(encoded.len(), 66);
        assert_eq!(decode_hash(&encoded).unwrap(), hash);
        assert_eq!(decode_hash(&encoded[2..]).unwrap(), hash);
        assert!(decode_hash("0x1234").is_err());
        assert!(decode_hash(&format!("0x{}", "zz".repeat(32))).is_err());
    }

    #[test]
    fn test_write_file_atomic_replaces_contents() {
        let dir = std::env::temp_dir().join(format!("airdrop-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("root.json");

        write_file_atomic(&path, "first").unwrap();
        write_file_atomic(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("tmp").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
