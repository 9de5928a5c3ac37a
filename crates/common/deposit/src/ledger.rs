use std::collections::HashSet;

use alloy_primitives::{aliases::B32, Address, Bytes, FixedBytes, B256, U256};
use ssz_types::FixedVector;
use tracing::{info, warn};

use crate::{
    commitment::CommitmentHasher,
    config::{DuplicatePolicy, LedgerConfig},
    constants::{PUBKEY_LENGTH, SUPPLY_VOTE_OPTIONS},
    deposit::Deposit,
    deposit_data::DepositData,
    error::DepositError,
    event::{DepositEvent, LedgerEvent},
    guard::{AccessGuard, CallContext, FreezeState, TokenTransfer},
    hasher::HashFunction,
    interface::InterfaceAdvertiser,
    merkle::{compute_merkle_proof, MerkleAccumulator},
    payload::{DecodedPayload, PayloadFormat},
    pubkey::PubKey,
    signature::BlsSignature,
    supply_vote::SupplyVoteTally,
};

/// One accepted deposit. Never mutated or removed once appended.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DepositRecord {
    pub pubkey: PubKey,
    pub withdrawal_credentials: B256,
    pub signature: BlsSignature,
    pub deposit_data_root: B256,
    pub supply_vote: Option<u8>,
    pub index: u64,
}

impl DepositRecord {
    /// The payload exactly as it was submitted.
    pub fn payload(&self) -> Bytes {
        DecodedPayload {
            pubkey: self.pubkey.clone(),
            withdrawal_credentials: self.withdrawal_credentials,
            signature: self.signature.clone(),
            deposit_data_root: self.deposit_data_root,
            supply_vote: self.supply_vote,
        }
        .encode()
    }

    pub fn to_deposit_data(&self, amount_gwei: u64) -> DepositData {
        DepositData {
            pubkey: self.pubkey.clone(),
            withdrawal_credentials: self.withdrawal_credentials,
            amount: amount_gwei,
            signature: self.signature.clone(),
        }
    }
}

/// Append-only deposit ledger. Owns the records, the deposit tree, the pubkey registry, the
/// supply vote tally and the freeze state; they only change through [`Self::submit`] and
/// [`Self::freeze`].
#[derive(Debug, Clone)]
pub struct DepositLedger {
    guard: AccessGuard,
    payload_format: PayloadFormat,
    duplicate_policy: DuplicatePolicy,
    hasher: CommitmentHasher,
    advertiser: InterfaceAdvertiser,
    tree: MerkleAccumulator,
    records: Vec<DepositRecord>,
    registered_pubkeys: HashSet<FixedBytes<PUBKEY_LENGTH>>,
    supply_votes: SupplyVoteTally,
    freeze: FreezeState,
    events: Vec<LedgerEvent>,
}

impl DepositLedger {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            guard: AccessGuard::new(
                config.ledger_address,
                config.token_contract,
                config.owner,
                config.deposit_start_timestamp,
            ),
            payload_format: config.payload_format,
            duplicate_policy: config.duplicate_policy,
            hasher: CommitmentHasher::new(config.hash_function),
            advertiser: InterfaceAdvertiser::default(),
            tree: MerkleAccumulator::new(config.hash_function),
            records: vec![],
            registered_pubkeys: HashSet::new(),
            supply_votes: SupplyVoteTally::default(),
            freeze: FreezeState::default(),
            events: vec![],
        }
    }

    /// Transfer hook the token invokes while sending funds to the ledger.
    #[allow(clippy::too_many_arguments)]
    pub fn on_transfer(
        &mut self,
        operator: Address,
        from: Address,
        to: Address,
        amount: U256,
        data: Bytes,
        operator_data: Bytes,
        context: &CallContext,
    ) -> Result<u64, DepositError> {
        self.submit(
            &TokenTransfer {
                operator,
                from,
                to,
                amount,
                data,
                operator_data,
            },
            context,
        )
    }

    /// Validates and appends one deposit, returning its index. Every check runs before the
    /// first write, a rejected deposit leaves the ledger untouched.
    pub fn submit(
        &mut self,
        transfer: &TokenTransfer,
        context: &CallContext,
    ) -> Result<u64, DepositError> {
        let payload = self.validate(transfer, context).inspect_err(|err| {
            warn!(
                from = %transfer.from,
                operator = %transfer.operator,
                block_number = context.block_number,
                "Rejected deposit: {err}"
            )
        })?;
        self.append(payload)
    }

    fn validate(
        &self,
        transfer: &TokenTransfer,
        context: &CallContext,
    ) -> Result<DecodedPayload, DepositError> {
        self.guard.check(transfer, context, &self.freeze)?;

        let payload = self.payload_format.decode(&transfer.data)?;
        if let Some(vote) = payload.supply_vote {
            SupplyVoteTally::validate(vote)?;
        }
        self.hasher.verify(&payload)?;

        let pubkey = payload.pubkey.to_fixed_bytes();
        if self.duplicate_policy == DuplicatePolicy::RejectPubkey
            && self.registered_pubkeys.contains(&pubkey)
        {
            return Err(DepositError::DuplicateDeposit(pubkey));
        }
        if self.tree.is_full() {
            return Err(DepositError::TreeFull);
        }
        Ok(payload)
    }

    fn append(&mut self, payload: DecodedPayload) -> Result<u64, DepositError> {
        let index = self.tree.deposit_count();
        self.tree.insert(payload.deposit_data_root)?;

        let pubkey = payload.pubkey.to_fixed_bytes();
        self.registered_pubkeys.insert(pubkey);
        if let Some(vote) = payload.supply_vote {
            self.supply_votes.record(vote);
        }

        info!(
            index,
            %pubkey,
            supply_vote = ?payload.supply_vote,
            deposit_root = %self.tree.root(),
            "Accepted deposit"
        );
        self.events.push(LedgerEvent::Deposit(DepositEvent::new(
            payload.pubkey.clone(),
            payload.withdrawal_credentials,
            self.hasher.amount_gwei(),
            payload.signature.clone(),
            index,
        )));
        self.records.push(DepositRecord {
            pubkey: payload.pubkey,
            withdrawal_credentials: payload.withdrawal_credentials,
            signature: payload.signature,
            deposit_data_root: payload.deposit_data_root,
            supply_vote: payload.supply_vote,
            index,
        });
        Ok(index)
    }

    /// Schedules the one-way freeze. Only the owner may call this, and only once.
    pub fn freeze(&mut self, context: &CallContext) -> Result<u64, DepositError> {
        self.guard.check_owner(context)?;
        let freeze_block = self.freeze.initiate(context.block_number)?;

        info!(
            start_block = context.block_number,
            freeze_block, "Scheduled deposit freeze"
        );
        self.events.push(LedgerEvent::FreezeInitiated {
            start_block: context.block_number,
            freeze_block,
        });
        Ok(freeze_block)
    }

    /// Raw payloads of every accepted deposit, in index order.
    pub fn deposit_data(&self) -> Vec<Bytes> {
        self.records.iter().map(DepositRecord::payload).collect()
    }

    /// Raw payload at `index`, empty when no such deposit exists.
    pub fn deposit_data_by_index(&self, index: u64) -> Bytes {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.records.get(index))
            .map(DepositRecord::payload)
            .unwrap_or_default()
    }

    pub fn deposit_count(&self) -> u64 {
        self.tree.deposit_count()
    }

    pub fn deposit_root(&self) -> B256 {
        self.tree.root()
    }

    pub fn is_pubkey_registered(&self, pubkey: &[u8]) -> bool {
        pubkey.len() == PUBKEY_LENGTH
            && self
                .registered_pubkeys
                .contains(&FixedBytes::from_slice(pubkey))
    }

    /// Deposits per vote value, and the number of accepted deposits. A deposit without a vote
    /// counts towards the total but towards no bucket.
    pub fn votes_per_supply(&self) -> ([u64; SUPPLY_VOTE_OPTIONS], u64) {
        (*self.supply_votes.votes(), self.deposit_count())
    }

    pub fn supply_votes(&self) -> &SupplyVoteTally {
        &self.supply_votes
    }

    pub fn supports_interface(&self, interface_id: B32) -> bool {
        self.advertiser.supports_interface(interface_id)
    }

    pub fn implements_recipient_hash(&self, interface_hash: B256) -> bool {
        self.advertiser.implements_recipient_hash(interface_hash)
    }

    pub fn is_frozen(&self, block_number: u64) -> bool {
        self.freeze.is_frozen_at(block_number)
    }

    pub fn freeze_state(&self) -> FreezeState {
        self.freeze
    }

    pub fn records(&self) -> &[DepositRecord] {
        &self.records
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn accumulator(&self) -> &MerkleAccumulator {
        &self.tree
    }

    pub fn payload_format(&self) -> PayloadFormat {
        self.payload_format
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hasher.hash_function()
    }

    /// Deposit at `index` with its proof against the current deposit root. Walks every leaf,
    /// so it is a query for genesis tooling rather than part of submission.
    pub fn deposit_proof(&self, index: u64) -> Option<Deposit> {
        let record = self.records.get(usize::try_from(index).ok()?)?;
        let leaves = self
            .records
            .iter()
            .map(|record| record.deposit_data_root)
            .collect::<Vec<_>>();
        let proof = compute_merkle_proof(&leaves, record.index as usize, self.hash_function())?;
        Some(Deposit {
            proof: FixedVector::from(proof),
            data: record.to_deposit_data(self.hasher.amount_gwei()),
        })
    }
}
