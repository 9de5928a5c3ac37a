use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, FixedVector};
use tree_hash_derive::TreeHash;

use crate::{constants::PUBKEY_LENGTH, error::DepositError};

/// BLS12-381 public key in compressed form.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct PubKey {
    pub inner: FixedVector<u8, typenum::U48>,
}

impl PubKey {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DepositError> {
        Ok(Self {
            inner: FixedVector::new(bytes.to_vec())
                .map_err(|_| DepositError::InvalidEncoding(bytes.len()))?,
        })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Registry key for the duplicate guard.
    pub fn to_fixed_bytes(&self) -> FixedBytes<PUBKEY_LENGTH> {
        FixedBytes::from_slice(&self.inner)
    }
}
