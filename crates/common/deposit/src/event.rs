use alloy_primitives::{Bytes, B256, B64};

use crate::{pubkey::PubKey, signature::BlsSignature};

/// Deposit log in the layout external consumers parse byte for byte.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DepositEvent {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    /// Little-endian gwei.
    pub amount: B64,
    pub signature: BlsSignature,
    /// Little-endian deposit index.
    pub index: B64,
}

impl DepositEvent {
    pub fn new(
        pubkey: PubKey,
        withdrawal_credentials: B256,
        amount_gwei: u64,
        signature: BlsSignature,
        index: u64,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            amount: B64::from(amount_gwei.to_le_bytes()),
            signature,
            index: B64::from(index.to_le_bytes()),
        }
    }

    /// `pubkey ‖ withdrawal_credentials ‖ amount ‖ signature ‖ index`, 192 bytes.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(
            [
                self.pubkey.as_slice(),
                self.withdrawal_credentials.as_slice(),
                self.amount.as_slice(),
                self.signature.as_slice(),
                self.index.as_slice(),
            ]
            .concat(),
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LedgerEvent {
    Deposit(DepositEvent),
    FreezeInitiated { start_block: u64, freeze_block: u64 },
}
