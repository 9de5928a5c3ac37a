pub mod commitment;
pub mod config;
pub mod constants;
pub mod deposit;
pub mod deposit_data;
pub mod error;
pub mod event;
pub mod guard;
pub mod hasher;
pub mod interface;
pub mod ledger;
pub mod merkle;
pub mod payload;
pub mod pubkey;
pub mod signature;
pub mod supply_vote;
