use alloy_primitives::{aliases::B32, keccak256, B256};

use crate::constants::TOKENS_RECIPIENT_INTERFACE_HASH;

pub const INTROSPECTION_SIGNATURES: &[&str] = &["supportsInterface(bytes4)"];

pub const DEPOSIT_INTERFACE_SIGNATURES: &[&str] = &[
    "get_deposit_root()",
    "depositCount()",
    "getDepositData()",
    "getDepositDataByIndex(uint256)",
    "isPubkeyRegistered(bytes)",
    "getsVotesPerSupply()",
    "isContractFrozen()",
    "freezeContract()",
];

/// The ether-funded deposit contract interface, deliberately not advertised.
pub const LEGACY_DEPOSIT_INTERFACE_SIGNATURES: &[&str] = &[
    "deposit(bytes,bytes,bytes,bytes32)",
    "get_deposit_root()",
    "get_deposit_count()",
];

/// First four bytes of the keccak hash of a function signature.
pub fn selector(signature: &str) -> B32 {
    B32::from_slice(&keccak256(signature.as_bytes())[..4])
}

/// XOR of the selectors of every function in the set.
pub fn interface_id(signatures: &[&str]) -> B32 {
    let id = signatures
        .iter()
        .map(|signature| u32::from_be_bytes(selector(signature).0))
        .fold(0u32, |id, selector| id ^ selector);
    B32::from(id.to_be_bytes())
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct InterfaceAdvertiser {
    introspection_id: B32,
    deposit_interface_id: B32,
}

impl Default for InterfaceAdvertiser {
    fn default() -> Self {
        Self {
            introspection_id: interface_id(INTROSPECTION_SIGNATURES),
            deposit_interface_id: interface_id(DEPOSIT_INTERFACE_SIGNATURES),
        }
    }
}

impl InterfaceAdvertiser {
    pub fn deposit_interface_id(&self) -> B32 {
        self.deposit_interface_id
    }

    pub fn supports_interface(&self, interface_id: B32) -> bool {
        interface_id == self.introspection_id || interface_id == self.deposit_interface_id
    }

    /// Whether the ledger registers itself under `interface_hash` with the token registry.
    pub fn implements_recipient_hash(&self, interface_hash: B256) -> bool {
        interface_hash == TOKENS_RECIPIENT_INTERFACE_HASH
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{fixed_bytes, keccak256};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("supportsInterface(bytes4)", fixed_bytes!("01ffc9a7"))]
    #[case("get_deposit_root()", fixed_bytes!("c5f2892f"))]
    #[case("deposit(bytes,bytes,bytes,bytes32)", fixed_bytes!("22895118"))]
    fn test_selector(#[case] signature: &str, #[case] expected: B32) {
        assert_eq!(selector(signature), expected);
    }

    #[test]
    fn test_interface_ids() {
        assert_eq!(
            interface_id(INTROSPECTION_SIGNATURES),
            fixed_bytes!("01ffc9a7")
        );
        assert_eq!(
            interface_id(LEGACY_DEPOSIT_INTERFACE_SIGNATURES),
            fixed_bytes!("85640907")
        );
        assert_eq!(
            interface_id(DEPOSIT_INTERFACE_SIGNATURES),
            fixed_bytes!("6e6f00d0")
        );
    }

    #[rstest]
    #[case(fixed_bytes!("01ffc9a7"), true)]
    #[case(fixed_bytes!("6e6f00d0"), true)]
    #[case(fixed_bytes!("85640907"), false)]
    #[case(fixed_bytes!("ffffffff"), false)]
    #[case(fixed_bytes!("00000000"), false)]
    fn test_supports_interface(#[case] interface_id: B32, #[case] supported: bool) {
        assert_eq!(
            InterfaceAdvertiser::default().supports_interface(interface_id),
            supported
        );
    }

    #[test]
    fn test_advertised_deposit_interface_id() {
        let advertiser = InterfaceAdvertiser::default();
        assert_eq!(advertiser.deposit_interface_id(), fixed_bytes!("6e6f00d0"));
        assert!(advertiser.supports_interface(advertiser.deposit_interface_id()));
    }

    #[test]
    fn test_recipient_hash() {
        let advertiser = InterfaceAdvertiser::default();
        assert!(advertiser.implements_recipient_hash(keccak256("ERC777TokensRecipient")));
        assert!(!advertiser.implements_recipient_hash(keccak256("ERC777TokensSender")));
    }
}
