use std::path::Path;

use alloy_primitives::Address;
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_DEPOSIT_START_TIMESTAMP, hasher::HashFunction, payload::PayloadFormat,
};

/// What happens when a pubkey that already has an accepted deposit deposits again.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every consistent payload is appended, repeated leaves included.
    Allow,
    #[default]
    RejectPubkey,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    /// Address the token sends deposits to.
    pub ledger_address: Address,
    /// The only contract allowed to invoke the transfer hook.
    pub token_contract: Address,
    /// The only caller allowed to schedule the freeze.
    pub owner: Address,
    #[serde(default = "default_deposit_start_timestamp")]
    pub deposit_start_timestamp: u64,
    #[serde(default)]
    pub payload_format: PayloadFormat,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub hash_function: HashFunction,
}

fn default_deposit_start_timestamp() -> u64 {
    DEFAULT_DEPOSIT_START_TIMESTAMP
}

impl LedgerConfig {
    pub fn new(ledger_address: Address, token_contract: Address, owner: Address) -> Self {
        Self {
            ledger_address,
            token_contract,
            owner,
            deposit_start_timestamp: DEFAULT_DEPOSIT_START_TIMESTAMP,
            payload_format: PayloadFormat::default(),
            duplicate_policy: DuplicatePolicy::default(),
            hash_function: HashFunction::default(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse ledger config")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ledger config {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }
}
