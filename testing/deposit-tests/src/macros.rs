#[macro_export]
macro_rules! test_deposit_scenarios {
    ($hash_function:ident) => {
        paste::paste! {
            #[cfg(test)]
            #[allow(non_snake_case)]
            mod [<tests_ $hash_function>] {
                use alloy_primitives::B256;
                use genesis_deposit::{
                    config::DuplicatePolicy,
                    error::DepositError,
                    hasher::HashFunction,
                    ledger::DepositLedger,
                    payload::PayloadFormat,
                };
                use rstest::rstest;
                use $crate::utils::{
                    generate_deposit, ledger_config, naive_deposit_root, token_call,
                    token_transfer,
                };

                const HASH_FUNCTION: HashFunction = HashFunction::$hash_function;

                fn ledger(
                    payload_format: PayloadFormat,
                    duplicate_policy: DuplicatePolicy,
                ) -> DepositLedger {
                    DepositLedger::new(&ledger_config(
                        HASH_FUNCTION,
                        payload_format,
                        duplicate_policy,
                    ))
                }

                #[rstest]
                #[case(1)]
                #[case(2)]
                #[case(3)]
                #[case(8)]
                #[case(33)]
                fn test_root_matches_full_recomputation(#[case] count: u64) {
                    let mut ledger = ledger(PayloadFormat::WithVote, DuplicatePolicy::RejectPubkey);
                    let mut leaves: Vec<B256> = vec![];
                    assert_eq!(ledger.deposit_root(), naive_deposit_root(&leaves, HASH_FUNCTION));

                    for seed in 0..count {
                        let deposit = generate_deposit(seed, Some((seed % 101) as u8), HASH_FUNCTION);
                        let index = ledger
                            .submit(&token_transfer(deposit.encode()), &token_call(seed))
                            .unwrap();
                        assert_eq!(index, seed);

                        leaves.push(deposit.deposit_data_root);
                        assert_eq!(ledger.deposit_root(), naive_deposit_root(&leaves, HASH_FUNCTION));
                    }
                    assert_eq!(ledger.deposit_count(), count);
                }

                #[test]
                fn test_four_validators() {
                    let mut ledger = ledger(PayloadFormat::Legacy, DuplicatePolicy::RejectPubkey);
                    let deposits = (100..104)
                        .map(|seed| generate_deposit(seed, None, HASH_FUNCTION))
                        .collect::<Vec<_>>();
                    for (block_number, deposit) in deposits.iter().enumerate() {
                        ledger
                            .submit(
                                &token_transfer(deposit.encode()),
                                &token_call(block_number as u64),
                            )
                            .unwrap();
                    }

                    let leaves = deposits
                        .iter()
                        .map(|deposit| deposit.deposit_data_root)
                        .collect::<Vec<_>>();
                    assert_eq!(ledger.deposit_count(), 4);
                    assert_eq!(ledger.deposit_root(), naive_deposit_root(&leaves, HASH_FUNCTION));
                    assert_eq!(ledger.deposit_data_by_index(2), deposits[2].encode());
                    assert_eq!(
                        ledger.deposit_data(),
                        deposits.iter().map(|deposit| deposit.encode()).collect::<Vec<_>>()
                    );
                    assert!(ledger.deposit_data_by_index(4).is_empty());

                    let (votes, total) = ledger.votes_per_supply();
                    assert_eq!(total, ledger.deposit_count());
                    assert!(votes.iter().all(|count| *count == 0));
                }

                #[rstest]
                #[case(DuplicatePolicy::Allow, Ok(1), 2)]
                #[case(
                    DuplicatePolicy::RejectPubkey,
                    Err(DepositError::DuplicateDeposit(
                        generate_deposit(7, None, HASH_FUNCTION).pubkey.to_fixed_bytes()
                    )),
                    1
                )]
                fn test_duplicate_policy(
                    #[case] duplicate_policy: DuplicatePolicy,
                    #[case] expected: Result<u64, DepositError>,
                    #[case] deposit_count: u64,
                ) {
                    let mut ledger = ledger(PayloadFormat::Legacy, duplicate_policy);
                    let data = generate_deposit(7, None, HASH_FUNCTION).encode();

                    assert_eq!(
                        ledger.submit(&token_transfer(data.clone()), &token_call(1)),
                        Ok(0)
                    );
                    let root = ledger.deposit_root();
                    assert_eq!(ledger.submit(&token_transfer(data), &token_call(2)), expected);
                    assert_eq!(ledger.deposit_count(), deposit_count);
                    if expected.is_err() {
                        assert_eq!(ledger.deposit_root(), root);
                    }
                }
            }
        }
    };
}
