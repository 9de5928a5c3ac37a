use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEPOSIT_AMOUNT, FREEZE_DELAY_BLOCKS},
    error::DepositError,
};

/// Who invoked the ledger and where the chain is at that moment.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CallContext {
    pub caller: Address,
    pub block_number: u64,
    pub timestamp: u64,
}

/// Arguments of the token's transfer hook. `operator` and `from` differ when an authorized
/// operator deposits on behalf of a holder.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TokenTransfer {
    pub operator: Address,
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub data: Bytes,
    pub operator_data: Bytes,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct FreezeState {
    frozen_initiated: bool,
    freeze_block: Option<u64>,
}

impl FreezeState {
    pub fn is_initiated(&self) -> bool {
        self.frozen_initiated
    }

    pub fn freeze_block(&self) -> Option<u64> {
        self.freeze_block
    }

    pub fn is_frozen_at(&self, block_number: u64) -> bool {
        self.frozen_initiated
            && self
                .freeze_block
                .is_some_and(|freeze_block| block_number >= freeze_block)
    }

    /// Schedules the cutoff `FREEZE_DELAY_BLOCKS` after the next block and returns it. One-way.
    pub(crate) fn initiate(&mut self, block_number: u64) -> Result<u64, DepositError> {
        if self.frozen_initiated {
            return Err(DepositError::AlreadyFrozen(
                self.freeze_block.unwrap_or_default(),
            ));
        }
        let freeze_block = block_number + 1 + FREEZE_DELAY_BLOCKS;
        self.frozen_initiated = true;
        self.freeze_block = Some(freeze_block);
        Ok(freeze_block)
    }
}

/// Preconditions a token callback must satisfy before its payload is even decoded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AccessGuard {
    ledger_address: Address,
    token_contract: Address,
    owner: Address,
    deposit_start_timestamp: u64,
}

impl AccessGuard {
    pub fn new(
        ledger_address: Address,
        token_contract: Address,
        owner: Address,
        deposit_start_timestamp: u64,
    ) -> Self {
        Self {
            ledger_address,
            token_contract,
            owner,
            deposit_start_timestamp,
        }
    }

    pub fn ledger_address(&self) -> Address {
        self.ledger_address
    }

    pub fn token_contract(&self) -> Address {
        self.token_contract
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn deposit_start_timestamp(&self) -> u64 {
        self.deposit_start_timestamp
    }

    /// Runs the caller, amount, start time and freeze checks in that order.
    pub fn check(
        &self,
        transfer: &TokenTransfer,
        context: &CallContext,
        freeze: &FreezeState,
    ) -> Result<(), DepositError> {
        if context.caller != self.token_contract || transfer.to != self.ledger_address {
            return Err(DepositError::InvalidCaller);
        }
        if transfer.amount != DEPOSIT_AMOUNT {
            return Err(DepositError::InvalidAmount(transfer.amount));
        }
        if context.timestamp < self.deposit_start_timestamp {
            return Err(DepositError::TooEarly {
                start: self.deposit_start_timestamp,
                now: context.timestamp,
            });
        }
        if freeze.is_frozen_at(context.block_number) {
            return Err(DepositError::Frozen(
                freeze.freeze_block().unwrap_or(context.block_number),
            ));
        }
        Ok(())
    }

    pub fn check_owner(&self, context: &CallContext) -> Result<(), DepositError> {
        if context.caller != self.owner {
            return Err(DepositError::NotOwner(context.caller));
        }
        Ok(())
    }
}
