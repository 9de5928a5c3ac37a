use alloy_primitives::B256;

use crate::{
    constants::DEPOSIT_AMOUNT_GWEI, error::DepositError, hasher::HashFunction,
    payload::DecodedPayload, pubkey::PubKey, signature::BlsSignature,
};

/// Root of the `(pubkey, withdrawal_credentials, amount, signature)` hash tree:
///
/// ```text
/// pubkey_root    = H(pubkey ‖ 0^16)
/// signature_root = H(H(signature[0..64]) ‖ H(signature[64..96] ‖ 0^32))
/// root           = H(H(pubkey_root ‖ withdrawal_credentials) ‖ H(amount_le ‖ 0^24 ‖ signature_root))
/// ```
///
/// With [`HashFunction::Sha256`] this is the SSZ `hash_tree_root` of the deposit data.
pub fn compute_deposit_data_root(
    pubkey: &PubKey,
    withdrawal_credentials: B256,
    signature: &BlsSignature,
    amount_gwei: u64,
    hash_function: HashFunction,
) -> B256 {
    let signature = signature.as_slice();
    let pubkey_root = hash_function.hash(&[pubkey.as_slice(), &[0u8; 16]].concat());
    let signature_root = hash_function.hash_concat(
        hash_function.hash(&signature[..64]).as_slice(),
        hash_function
            .hash(&[&signature[64..], &[0u8; 32]].concat())
            .as_slice(),
    );
    let left = hash_function.hash_concat(pubkey_root.as_slice(), withdrawal_credentials.as_slice());
    let right = hash_function.hash(
        &[
            &amount_gwei.to_le_bytes()[..],
            &[0u8; 24],
            signature_root.as_slice(),
        ]
        .concat(),
    );
    hash_function.hash_concat(left.as_slice(), right.as_slice())
}

/// Re-derives the caller supplied `deposit_data_root`. This certifies that the tuple is
/// internally consistent; the signature itself is left to the consensus client.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CommitmentHasher {
    hash_function: HashFunction,
    amount_gwei: u64,
}

impl CommitmentHasher {
    pub fn new(hash_function: HashFunction) -> Self {
        Self {
            hash_function,
            amount_gwei: DEPOSIT_AMOUNT_GWEI,
        }
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn amount_gwei(&self) -> u64 {
        self.amount_gwei
    }

    pub fn compute_root(
        &self,
        pubkey: &PubKey,
        withdrawal_credentials: B256,
        signature: &BlsSignature,
    ) -> B256 {
        compute_deposit_data_root(
            pubkey,
            withdrawal_credentials,
            signature,
            self.amount_gwei,
            self.hash_function,
        )
    }

    pub fn verify(&self, payload: &DecodedPayload) -> Result<(), DepositError> {
        let computed = self.compute_root(
            &payload.pubkey,
            payload.withdrawal_credentials,
            &payload.signature,
        );
        if computed != payload.deposit_data_root {
            return Err(DepositError::RootMismatch {
                computed,
                supplied: payload.deposit_data_root,
            });
        }
        Ok(())
    }
}
