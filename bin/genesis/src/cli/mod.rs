use std::{path::PathBuf, str::FromStr};

use alloy_primitives::{Bytes, B256};
use clap::{Parser, Subcommand};
use genesis_deposit::{
    commitment::compute_deposit_data_root, constants::DEPOSIT_AMOUNT_GWEI,
    hasher::HashFunction, pubkey::PubKey, signature::BlsSignature,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the deposit data root of a validator registration
    #[command(name = "root")]
    Root(RootCommand),

    /// Feed a list of payloads through a fresh ledger
    #[command(name = "replay")]
    Replay(ReplayCommand),
}

#[derive(Debug, Parser)]
pub struct RootCommand {
    /// BLS public key, 48 bytes hex
    #[arg(long, value_parser = Bytes::from_str)]
    pub pubkey: Bytes,

    #[arg(long)]
    pub withdrawal_credentials: B256,

    /// BLS signature, 96 bytes hex
    #[arg(long, value_parser = Bytes::from_str)]
    pub signature: Bytes,

    #[arg(long, default_value_t = DEPOSIT_AMOUNT_GWEI)]
    pub amount_gwei: u64,

    /// sha256 or keccak256
    #[arg(long = "hash", default_value = "keccak256", value_parser = parse_hash_function)]
    pub hash_function: HashFunction,
}

impl RootCommand {
    pub fn deposit_data_root(&self) -> anyhow::Result<B256> {
        Ok(compute_deposit_data_root(
            &PubKey::from_slice(&self.pubkey)?,
            self.withdrawal_credentials,
            &BlsSignature::from_slice(&self.signature)?,
            self.amount_gwei,
            self.hash_function,
        ))
    }
}

#[derive(Debug, Parser)]
pub struct ReplayCommand {
    /// Ledger configuration (YAML)
    #[arg(long, env = "GENESIS_LEDGER_CONFIG")]
    pub config: PathBuf,

    /// YAML or JSON list of hex encoded payloads
    #[arg(long)]
    pub payloads: PathBuf,
}

pub fn parse_hash_function(value: &str) -> Result<HashFunction, String> {
    match value.to_ascii_lowercase().as_str() {
        "sha256" => Ok(HashFunction::Sha256),
        "keccak256" => Ok(HashFunction::Keccak256),
        other => Err(format!("unknown hash function {other}, expected sha256 or keccak256")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_command(hash: &str) -> RootCommand {
        let pubkey = format!("0x{}", "11".repeat(48));
        let withdrawal_credentials = format!("0x{}", "22".repeat(32));
        let signature = format!("0x{}", "33".repeat(96));
        let cli = Cli::parse_from([
            "program",
            "root",
            "--pubkey",
            &pubkey,
            "--withdrawal-credentials",
            &withdrawal_credentials,
            "--signature",
            &signature,
            "--hash",
            hash,
        ]);
        match cli.command {
            Commands::Root(cmd) => cmd,
            Commands::Replay(_) => panic!("expected root command"),
        }
    }

    #[test]
    fn test_cli_root_command() {
        let cmd = root_command("keccak256");
        assert_eq!(cmd.pubkey, Bytes::from(vec![0x11; 48]));
        assert_eq!(cmd.withdrawal_credentials, B256::repeat_byte(0x22));
        assert_eq!(cmd.signature, Bytes::from(vec![0x33; 96]));
        assert_eq!(cmd.amount_gwei, DEPOSIT_AMOUNT_GWEI);
        assert_eq!(cmd.hash_function, HashFunction::Keccak256);
    }

    #[test]
    fn test_root_command_prints_deposit_data_root() {
        assert_eq!(
            root_command("keccak256").deposit_data_root().unwrap(),
            B256::from_str("0xac20f9a0437be6a64389d9c4408a45223aff78e62b506bb179c095a9ea97056d")
                .unwrap()
        );
        assert_eq!(
            root_command("sha256").deposit_data_root().unwrap(),
            B256::from_str("0xcb2dbb2331ca1d409208dacd445bb071331eec46bae0db6cd470cdf53c550498")
                .unwrap()
        );
    }

    #[test]
    fn test_root_command_defaults_to_keccak256() {
        let cli = Cli::parse_from([
            "program",
            "root",
            "--pubkey",
            "0x11",
            "--withdrawal-credentials",
            &format!("0x{}", "22".repeat(32)),
            "--signature",
            "0x33",
        ]);
        match cli.command {
            Commands::Root(cmd) => {
                assert_eq!(cmd.hash_function, HashFunction::Keccak256);
                assert!(cmd.deposit_data_root().is_err());
            }
            Commands::Replay(_) => panic!("expected root command"),
        }
    }

    #[test]
    fn test_cli_replay_command() {
        let cli = Cli::parse_from([
            "program",
            "replay",
            "--config",
            "ledger.yaml",
            "--payloads",
            "payloads.json",
        ]);

        match cli.command {
            Commands::Replay(cmd) => {
                assert_eq!(cmd.config, PathBuf::from("ledger.yaml"));
                assert_eq!(cmd.payloads, PathBuf::from("payloads.json"));
            }
            Commands::Root(_) => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_hash() {
        assert!(Cli::try_parse_from([
            "program",
            "root",
            "--pubkey",
            "0x11",
            "--withdrawal-credentials",
            &format!("0x{}", "22".repeat(32)),
            "--signature",
            "0x33",
            "--hash",
            "blake2",
        ])
        .is_err());
    }
}
