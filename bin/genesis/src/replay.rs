use std::path::Path;

use alloy_primitives::{Address, Bytes};
use anyhow::Context;
use genesis_deposit::{
    config::LedgerConfig, constants::DEPOSIT_AMOUNT, guard::CallContext, ledger::DepositLedger,
};
use tracing::info;

pub fn load_payloads(path: &Path) -> anyhow::Result<Vec<Bytes>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payloads {}", path.display()))?;
    serde_yaml::from_str(&content).context("Failed to parse payload list")
}

/// Submits every payload through the token callback of a fresh ledger, one block apart,
/// starting at the configured deposit start time.
pub fn replay(config: &LedgerConfig, payloads: &[Bytes]) -> anyhow::Result<DepositLedger> {
    let mut ledger = DepositLedger::new(config);
    for (block_number, payload) in payloads.iter().enumerate() {
        let context = CallContext {
            caller: config.token_contract,
            block_number: block_number as u64,
            timestamp: config.deposit_start_timestamp,
        };
        ledger
            .on_transfer(
                Address::ZERO,
                Address::ZERO,
                config.ledger_address,
                DEPOSIT_AMOUNT,
                payload.clone(),
                Bytes::new(),
                &context,
            )
            .with_context(|| format!("Payload {block_number} was rejected"))?;
    }

    let (votes, total) = ledger.votes_per_supply();
    info!(
        deposit_count = ledger.deposit_count(),
        deposit_root = %ledger.deposit_root(),
        "Replayed deposits"
    );
    for (supply, count) in votes.iter().enumerate().filter(|(_, count)| **count > 0) {
        info!(supply, count, total, "Supply vote");
    }
    Ok(ledger)
}
