use alloy_primitives::{b256, B256, U256};

pub const DEPOSIT_CONTRACT_TREE_DEPTH: usize = 32;

/// The accumulator refuses the leaf that would fill the tree completely.
pub const MAX_DEPOSIT_COUNT: u64 = (1 << DEPOSIT_CONTRACT_TREE_DEPTH) - 1;

pub const GWEI_PER_TOKEN: u64 = 1_000_000_000;
pub const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Stake size in gwei, the amount term of every deposit data root.
pub const DEPOSIT_AMOUNT_GWEI: u64 = 32 * GWEI_PER_TOKEN;

/// Stake size in the token's base unit (32 * 10^18).
pub const DEPOSIT_AMOUNT: U256 = U256::from_limbs([0xbc16_d674_ec80_0000, 1, 0, 0]);

/// Roughly one week of blocks.
pub const FREEZE_DELAY_BLOCKS: u64 = 46_523;

pub const MAX_SUPPLY_VOTE: u8 = 100;
pub const SUPPLY_VOTE_OPTIONS: usize = MAX_SUPPLY_VOTE as usize + 1;

pub const DEFAULT_DEPOSIT_START_TIMESTAMP: u64 = 1_682_007_600;

pub const PUBKEY_LENGTH: usize = 48;
pub const WITHDRAWAL_CREDENTIALS_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 96;
pub const LEGACY_PAYLOAD_LENGTH: usize = 208;
pub const VOTED_PAYLOAD_LENGTH: usize = LEGACY_PAYLOAD_LENGTH + 1;

/// `keccak256("ERC777TokensRecipient")`
pub const TOKENS_RECIPIENT_INTERFACE_HASH: B256 =
    b256!("b281fc8c12954d22544db45de3159a39272895b169a852b314f9cc762e44c53b");
