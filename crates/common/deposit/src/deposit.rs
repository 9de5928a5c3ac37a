use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum::U33, FixedVector};
use tree_hash_derive::TreeHash;

use crate::{
    constants::DEPOSIT_CONTRACT_TREE_DEPTH,
    deposit_data::DepositData,
    hasher::HashFunction,
    merkle::is_valid_merkle_branch,
};

/// A deposit together with its inclusion proof against a deposit root.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Deposit {
    pub proof: FixedVector<B256, U33>,
    pub data: DepositData,
}

impl Deposit {
    pub fn verify(&self, index: u64, deposit_root: B256, hash_function: HashFunction) -> bool {
        is_valid_merkle_branch(
            self.data.deposit_data_root(hash_function),
            &self.proof,
            DEPOSIT_CONTRACT_TREE_DEPTH as u64 + 1, // Add 1 for the List length mix-in
            index,
            deposit_root,
            hash_function,
        )
    }
}
