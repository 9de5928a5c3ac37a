use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, FixedVector};
use tree_hash_derive::TreeHash;

use crate::error::DepositError;

/// Proof-of-possession signature over the deposit message. Stored and hashed, never verified
/// here.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct BlsSignature {
    pub signature: FixedVector<u8, typenum::U96>,
}

impl BlsSignature {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DepositError> {
        Ok(Self {
            signature: FixedVector::new(bytes.to_vec())
                .map_err(|_| DepositError::InvalidEncoding(bytes.len()))?,
        })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.signature
    }
}
