use alloy_primitives::{keccak256, B256};
use ethereum_hashing::hash_fixed;
use serde::{Deserialize, Serialize};

use crate::constants::DEPOSIT_CONTRACT_TREE_DEPTH;

/// The 32-byte hash every tree node, commitment root and zero hash is built with.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// Consensus-layer hash, gives SSZ-compatible roots.
    Sha256,
    /// Execution-layer hash the deposit tooling builds roots with.
    #[default]
    Keccak256,
}

impl HashFunction {
    pub fn hash(&self, input: &[u8]) -> B256 {
        match self {
            Self::Sha256 => B256::from(hash_fixed(input)),
            Self::Keccak256 => keccak256(input),
        }
    }

    pub fn hash_concat(&self, left: &[u8], right: &[u8]) -> B256 {
        self.hash(&[left, right].concat())
    }

    /// Roots of empty subtrees: `zero_hashes[h + 1] = H(zero_hashes[h] ‖ zero_hashes[h])`.
    pub fn zero_hashes(&self) -> [B256; DEPOSIT_CONTRACT_TREE_DEPTH] {
        let mut zero_hashes = [B256::ZERO; DEPOSIT_CONTRACT_TREE_DEPTH];
        for height in 0..DEPOSIT_CONTRACT_TREE_DEPTH - 1 {
            zero_hashes[height + 1] =
                self.hash_concat(zero_hashes[height].as_slice(), zero_hashes[height].as_slice());
        }
        zero_hashes
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[rstest::rstest]
    #[case(
        HashFunction::Sha256,
        "0xf5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
    )]
    #[case(
        HashFunction::Keccak256,
        "0xad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5"
    )]
    fn test_first_zero_hash(#[case] hash_function: HashFunction, #[case] expected: &str) {
        let zero_hashes = hash_function.zero_hashes();
        assert_eq!(zero_hashes[0], B256::ZERO);
        assert_eq!(zero_hashes[1], B256::from_str(expected).unwrap());
    }

    #[test]
    fn test_zero_hashes_chain() {
        let hash_function = HashFunction::Sha256;
        let zero_hashes = hash_function.zero_hashes();
        for height in 1..DEPOSIT_CONTRACT_TREE_DEPTH {
            assert_eq!(
                zero_hashes[height],
                hash_function.hash(&[zero_hashes[height - 1].0, zero_hashes[height - 1].0].concat())
            );
        }
    }

    #[test]
    fn test_hash_function_from_yaml() {
        let hash_function: HashFunction = serde_yaml::from_str("sha256").unwrap();
        assert_eq!(hash_function, HashFunction::Sha256);
        assert_eq!(HashFunction::default(), HashFunction::Keccak256);
    }
}
