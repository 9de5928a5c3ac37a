use alloy_primitives::{address, keccak256, Address, Bytes, B256};
use genesis_deposit::{
    commitment::CommitmentHasher,
    config::{DuplicatePolicy, LedgerConfig},
    constants::{DEPOSIT_AMOUNT, DEPOSIT_CONTRACT_TREE_DEPTH, DEFAULT_DEPOSIT_START_TIMESTAMP},
    guard::{CallContext, TokenTransfer},
    hasher::HashFunction,
    payload::{DecodedPayload, PayloadFormat},
    pubkey::PubKey,
    signature::BlsSignature,
};

pub const LEDGER_ADDRESS: Address = address!("0000000000000000000000000000000000001000");
pub const TOKEN_CONTRACT: Address = address!("a8b919680258d369114910511cc87595aec0be6d");
pub const OWNER: Address = address!("6109dcd72b8a2485a5b3ac4e76965159e9893ab7");
pub const DEPOSITOR: Address = address!("de8531c4fdf2ce3014527baf57f8f788e240746e");

/// Deterministic bytes derived from `seed`, distinct per `domain`.
pub fn pseudo_random_bytes(seed: u64, domain: &[u8], length: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(length + 32);
    let mut counter = 0u64;
    while bytes.len() < length {
        let block = keccak256([domain, &seed.to_le_bytes(), &counter.to_le_bytes()].concat());
        bytes.extend_from_slice(block.as_slice());
        counter += 1;
    }
    bytes.truncate(length);
    bytes
}

/// A validator registration with a correctly computed deposit data root.
pub fn generate_deposit(
    seed: u64,
    supply_vote: Option<u8>,
    hash_function: HashFunction,
) -> DecodedPayload {
    let pubkey = PubKey::from_slice(&pseudo_random_bytes(seed, b"pubkey", 48))
        .expect("48 bytes make a pubkey");
    let withdrawal_credentials =
        B256::from_slice(&pseudo_random_bytes(seed, b"withdrawal_credentials", 32));
    let signature = BlsSignature::from_slice(&pseudo_random_bytes(seed, b"signature", 96))
        .expect("96 bytes make a signature");
    DecodedPayload {
        deposit_data_root: CommitmentHasher::new(hash_function).compute_root(
            &pubkey,
            withdrawal_credentials,
            &signature,
        ),
        pubkey,
        withdrawal_credentials,
        signature,
        supply_vote,
    }
}

/// Deposit root recomputed over the whole tree, level by level, without any branch caching.
pub fn naive_deposit_root(leaves: &[B256], hash_function: HashFunction) -> B256 {
    let mut zero_hash = B256::ZERO;
    let mut layer = leaves.to_vec();
    for _ in 0..DEPOSIT_CONTRACT_TREE_DEPTH {
        if layer.len() % 2 == 1 {
            layer.push(zero_hash);
        }
        layer = layer
            .chunks(2)
            .map(|pair| hash_function.hash_concat(pair[0].as_slice(), pair[1].as_slice()))
            .collect();
        zero_hash = hash_function.hash_concat(zero_hash.as_slice(), zero_hash.as_slice());
    }

    let mut length = [0u8; 32];
    length[..8].copy_from_slice(&(leaves.len() as u64).to_le_bytes());
    hash_function.hash_concat(layer.first().unwrap_or(&zero_hash).as_slice(), &length)
}

pub fn ledger_config(
    hash_function: HashFunction,
    payload_format: PayloadFormat,
    duplicate_policy: DuplicatePolicy,
) -> LedgerConfig {
    LedgerConfig {
        payload_format,
        duplicate_policy,
        hash_function,
        ..LedgerConfig::new(LEDGER_ADDRESS, TOKEN_CONTRACT, OWNER)
    }
}

pub fn token_transfer(data: Bytes) -> TokenTransfer {
    TokenTransfer {
        operator: DEPOSITOR,
        from: DEPOSITOR,
        to: LEDGER_ADDRESS,
        amount: DEPOSIT_AMOUNT,
        data,
        operator_data: Bytes::new(),
    }
}

pub fn token_call(block_number: u64) -> CallContext {
    CallContext {
        caller: TOKEN_CONTRACT,
        block_number,
        timestamp: DEFAULT_DEPOSIT_START_TIMESTAMP,
    }
}

pub fn owner_call(block_number: u64) -> CallContext {
    CallContext {
        caller: OWNER,
        ..token_call(block_number)
    }
}
