use alloy_primitives::{Address, FixedBytes, B256, U256};
use thiserror::Error;

use crate::constants::PUBKEY_LENGTH;

/// Reasons a deposit or a privileged call is rejected. Every variant aborts the whole call
/// before any ledger state is touched.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DepositError {
    #[error("not called on a transfer of the deposit token to this ledger")]
    InvalidCaller,

    #[error("cannot send an amount different from the fixed deposit amount, got {0}")]
    InvalidAmount(U256),

    #[error("deposits open at timestamp {start}, current timestamp is {now}")]
    TooEarly { start: u64, now: u64 },

    #[error("ledger is frozen since block {0}")]
    Frozen(u64),

    #[error("freeze already initiated, deposits stop at block {0}")]
    AlreadyFrozen(u64),

    #[error("deposit data not encoded properly, got {0} bytes")]
    InvalidEncoding(usize),

    #[error("supply vote {0} is out of range")]
    InvalidVote(u8),

    #[error("reconstructed deposit data root {computed} does not match supplied {supplied}")]
    RootMismatch { computed: B256, supplied: B256 },

    #[error("pubkey {0} is already registered")]
    DuplicateDeposit(FixedBytes<PUBKEY_LENGTH>),

    #[error("{0} is not the ledger owner")]
    NotOwner(Address),

    #[error("merkle tree is full")]
    TreeFull,
}
