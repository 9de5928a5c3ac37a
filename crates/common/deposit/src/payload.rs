use alloy_primitives::{Bytes, B256};
use serde::{Deserialize, Serialize};
use ssz::{Decode, Encode};
use ssz_derive::{Decode, Encode};

use crate::{
    constants::{LEGACY_PAYLOAD_LENGTH, VOTED_PAYLOAD_LENGTH},
    error::DepositError,
    pubkey::PubKey,
    signature::BlsSignature,
};

/// `pubkey ‖ withdrawal_credentials ‖ signature ‖ deposit_data_root`, 208 bytes.
#[derive(Debug, PartialEq, Clone, Encode, Decode)]
pub struct DepositPayload {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    pub signature: BlsSignature,
    pub deposit_data_root: B256,
}

/// [`DepositPayload`] followed by a one byte supply vote, 209 bytes.
#[derive(Debug, PartialEq, Clone, Encode, Decode)]
pub struct VotedDepositPayload {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    pub signature: BlsSignature,
    pub deposit_data_root: B256,
    pub supply_vote: u8,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DecodedPayload {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    pub signature: BlsSignature,
    pub deposit_data_root: B256,
    pub supply_vote: Option<u8>,
}

impl DecodedPayload {
    /// Splits a payload at its fixed offsets. The length picks the layout: 208 bytes has no
    /// vote, 209 bytes carries one. The vote range is not checked here.
    pub fn decode(bytes: &[u8]) -> Result<Self, DepositError> {
        let invalid = |_| DepositError::InvalidEncoding(bytes.len());
        match bytes.len() {
            LEGACY_PAYLOAD_LENGTH => DepositPayload::from_ssz_bytes(bytes)
                .map(Self::from)
                .map_err(invalid),
            VOTED_PAYLOAD_LENGTH => VotedDepositPayload::from_ssz_bytes(bytes)
                .map(Self::from)
                .map_err(invalid),
            length => Err(DepositError::InvalidEncoding(length)),
        }
    }

    pub fn encode(&self) -> Bytes {
        let payload = DepositPayload {
            pubkey: self.pubkey.clone(),
            withdrawal_credentials: self.withdrawal_credentials,
            signature: self.signature.clone(),
            deposit_data_root: self.deposit_data_root,
        };
        let mut bytes = payload.as_ssz_bytes();
        if let Some(vote) = self.supply_vote {
            bytes.push(vote);
        }
        Bytes::from(bytes)
    }
}

impl From<DepositPayload> for DecodedPayload {
    fn from(payload: DepositPayload) -> Self {
        Self {
            pubkey: payload.pubkey,
            withdrawal_credentials: payload.withdrawal_credentials,
            signature: payload.signature,
            deposit_data_root: payload.deposit_data_root,
            supply_vote: None,
        }
    }
}

impl From<VotedDepositPayload> for DecodedPayload {
    fn from(payload: VotedDepositPayload) -> Self {
        Self {
            pubkey: payload.pubkey,
            withdrawal_credentials: payload.withdrawal_credentials,
            signature: payload.signature,
            deposit_data_root: payload.deposit_data_root,
            supply_vote: Some(payload.supply_vote),
        }
    }
}

/// Payload layout a ledger accepts, fixed when the ledger is built.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadFormat {
    Legacy,
    #[default]
    WithVote,
}

impl PayloadFormat {
    pub fn payload_length(&self) -> usize {
        match self {
            Self::Legacy => LEGACY_PAYLOAD_LENGTH,
            Self::WithVote => VOTED_PAYLOAD_LENGTH,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedPayload, DepositError> {
        if bytes.len() != self.payload_length() {
            return Err(DepositError::InvalidEncoding(bytes.len()));
        }
        DecodedPayload::decode(bytes)
    }
}
