#[cfg(test)]
mod tests {
    use brett_mappings::brett_token::event_handlers::SET_BUY_FEES_EVENT_ABI;
    use brett_mappings::brett_token::{
        self, Approval, Holder, LogRecord, TokenAnalytics, Transfer, TransferHandler,
    };
    use brett_mappings::states::Entity;
    use brett_mappings::{
        handle_calls, handle_events, handle_logs, Config, ConfigError, Contract, Event,
        EventError, HandlerError, InMemoryRepo, MappingsError, ParamError, RepoError, U256,
    };
    use ethers::abi::Token;
    use ethers::types::{Address, H256};

    use crate::factory::*;
    use crate::test_runner::{self, ReadOnlyRepo, RepoReader};

    #[test]
    pub fn requires_a_contract() {
        let result = Config::new(InMemoryRepo::new()).build();

        assert!(matches!(result, Err(ConfigError::NoContract)));
    }

    #[test]
    pub fn requires_handlers_on_every_contract() {
        let result = Config::new(InMemoryRepo::new())
            .add_contract(Contract::new("Empty").add_address(BRETT_CONTRACT_ADDRESS, 0))
            .build();

        assert!(matches!(result, Err(ConfigError::NoHandler(name)) if name == "Empty"));
    }

    #[test]
    pub fn rejects_a_second_handler_for_the_same_event() {
        let contract = Contract::new("DoubleTransfer")
            .add_address(BRETT_CONTRACT_ADDRESS, 0)
            .add_handler(TransferHandler)
            .add_handler(TransferHandler);

        let result = Config::new(InMemoryRepo::new()).add_contract(contract).build();

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateHandler(abi)) if abi == Transfer::ABI
        ));
    }

    #[test]
    pub fn rejects_the_same_handler_across_contracts() {
        let result = test_runner::new_config()
            .add_contract(brett_token::contract("0x0000000000000000000000000000000000000b0b", 0))
            .build();

        assert!(matches!(result, Err(ConfigError::DuplicateHandler(_))));
    }

    #[tokio::test]
    pub async fn dispatches_many_batches_from_one_build() {
        let mappings = test_runner::new_mappings();

        for offset in 0..3 {
            let event = approval_event(wallet(1), wallet(2), 1, at(offset, 0));
            assert_eq!(handle_events(&mappings, &[event]).await.unwrap(), 1);
        }

        assert_eq!(mappings.repo.count(Approval::entity_type()).await, 3);
    }

    #[tokio::test]
    pub async fn fails_on_an_unregistered_event() {
        let event = Event::new(
            "event Paused(address account)",
            [("account", Token::Address(wallet(1)))],
            at(0, 0),
        );

        let result = test_runner::run_events(&[event]).await;

        assert!(matches!(
            result,
            Err(MappingsError::NoHandler(abi)) if abi == "event Paused(address account)"
        ));
    }

    #[tokio::test]
    pub async fn fails_on_an_unregistered_call() {
        let mappings = test_runner::new_mappings();
        let mut call = set_sell_fees_call(1, at(0, 0));
        call.function = "renounceOwnership()".to_string();

        let result = handle_calls(&mappings, &[call]).await;

        assert!(matches!(result, Err(MappingsError::NoHandler(_))));
    }

    #[tokio::test]
    pub async fn malformed_payload_writes_nothing() {
        let event = Event::new(
            Transfer::ABI,
            [
                ("from", Token::Address(wallet(1))),
                ("to", Token::Bool(true)),
                ("value", Token::Uint(U256::from(5))),
            ],
            at(0, 0),
        );
        let mappings = test_runner::new_mappings();

        let result = handle_events(&mappings, &[event]).await;

        match result {
            Err(MappingsError::Handler { trigger, error }) => {
                assert_eq!(trigger, Transfer::ABI);
                assert!(matches!(error, HandlerError::Param(ParamError::Mistyped { .. })));
            }
            other => panic!("expected a handler error, got {other:?}"),
        }
        assert_eq!(mappings.repo.count(Transfer::entity_type()).await, 0);
        assert_eq!(mappings.repo.count(Holder::entity_type()).await, 0);
        assert!(RepoReader::new(&mappings.repo).stored_analytics().await.is_none());
    }

    #[tokio::test]
    pub async fn missing_parameter_fails_fast() {
        let event = Event::new(SET_BUY_FEES_EVENT_ABI, Vec::<(&str, Token)>::new(), at(0, 0));

        let result = test_runner::run_events(&[event]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Handler {
                error: HandlerError::Param(ParamError::Missing(_)),
                ..
            })
        ));
    }

    #[tokio::test]
    pub async fn stops_at_the_first_failure() {
        let bad = Event::new(SET_BUY_FEES_EVENT_ABI, Vec::<(&str, Token)>::new(), at(1, 0));
        let mappings = test_runner::new_mappings();

        let result = handle_events(
            &mappings,
            &[
                transfer_event(wallet(1), wallet(2), 1, at(0, 0)),
                bad,
                transfer_event(wallet(1), wallet(2), 1, at(2, 0)),
            ],
        )
        .await;

        assert!(result.is_err());
        assert_eq!(mappings.repo.count(Transfer::entity_type()).await, 1);
    }

    #[tokio::test]
    pub async fn propagates_store_failures() {
        let mappings =
            Config::new(ReadOnlyRepo::default()).add_contract(brett_contract()).build().unwrap();

        let result =
            handle_events(&mappings, &[approval_event(wallet(1), wallet(2), 1, at(0, 0))]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Handler {
                error: HandlerError::Repo(RepoError::NotConnected),
                ..
            })
        ));
    }

    #[tokio::test]
    pub async fn returns_the_number_of_handled_events() {
        let mappings = test_runner::new_mappings();

        let handled = handle_events(
            &mappings,
            &[
                approval_event(wallet(1), wallet(2), 1, at(0, 0)),
                set_buy_fees_event(1, at(0, 1)),
            ],
        )
        .await
        .unwrap();

        assert_eq!(handled, 2);
    }

    #[tokio::test]
    pub async fn decodes_raw_transfer_logs() {
        let (a, b) = (wallet(1), wallet(2));
        let provenance = at(3, 7);
        let mappings = test_runner::new_mappings();

        let handled =
            handle_logs(&mappings, &[(transfer_log(a, b, 250, provenance), provenance.block_timestamp)])
                .await
                .unwrap();

        assert_eq!(handled, 1);

        let reader = RepoReader::new(&mappings.repo);
        let id = transfer_event(a, b, 250, provenance).log_record_id();
        let transfer: Transfer = reader.load(&id).await.unwrap();
        assert_eq!(transfer.from, a);
        assert_eq!(transfer.to, b);
        assert_eq!(transfer.value, U256::from(250));
        assert_eq!(transfer.block_timestamp, provenance.block_timestamp);
        assert_eq!(reader.holder(&b).await.unwrap().total_received, U256::from(250));
    }

    #[tokio::test]
    pub async fn skips_logs_outside_the_indexed_contracts() {
        let provenance = at(0, 0);
        let mut foreign = transfer_log(wallet(1), wallet(2), 5, provenance);
        foreign.address = Address::from_low_u64_be(0xdead);
        let mut removed = transfer_log(wallet(1), wallet(2), 5, at(0, 1));
        removed.removed = Some(true);
        let mut before_start = transfer_log(wallet(1), wallet(2), 5, at(0, 2));
        before_start.block_number = Some((BRETT_CONTRACT_START_BLOCK_NUMBER - 1).into());

        let mappings = test_runner::new_mappings();
        let handled = handle_logs(
            &mappings,
            &[(foreign, 0), (removed, 0), (before_start, 0)],
        )
        .await
        .unwrap();

        assert_eq!(handled, 0);
        assert_eq!(mappings.repo.count(Transfer::entity_type()).await, 0);
    }

    #[tokio::test]
    pub async fn fails_on_an_unknown_topic() {
        let mut log = transfer_log(wallet(1), wallet(2), 5, at(0, 0));
        log.topics[0] = H256::from_low_u64_be(0xbad);

        let result = handle_logs(&test_runner::new_mappings(), &[(log, 0)]).await;

        assert!(matches!(result, Err(MappingsError::Event(EventError::UnknownTopic(_)))));
    }

    #[tokio::test]
    pub async fn fails_on_a_log_without_provenance() {
        let mut log = transfer_log(wallet(1), wallet(2), 5, at(0, 0));
        log.transaction_hash = None;

        let result = handle_logs(&test_runner::new_mappings(), &[(log, 0)]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Event(EventError::MissingProvenance(_)))
        ));
    }

    #[tokio::test]
    pub async fn unrepresentable_balance_change_writes_nothing() {
        let (a, b) = (wallet(1), wallet(2));
        let event = Event::new(
            Transfer::ABI,
            [
                ("from", Token::Address(a)),
                ("to", Token::Address(b)),
                ("value", Token::Uint(U256::one() << 255)),
            ],
            at(0, 0),
        );
        let mappings = test_runner::new_mappings();

        let result = handle_events(&mappings, &[event]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Handler {
                error: HandlerError::Overflow("balance"),
                ..
            })
        ));
        assert_eq!(mappings.repo.count(Transfer::entity_type()).await, 0);
        assert_eq!(mappings.repo.count(TokenAnalytics::entity_type()).await, 0);
        assert_eq!(mappings.repo.count(Holder::entity_type()).await, 0);
    }

    #[tokio::test]
    pub async fn failed_transfer_leaves_earlier_state_untouched() {
        let (a, b, c) = (wallet(1), wallet(2), wallet(3));
        let mappings = test_runner::run_events(&[transfer_event(a, b, 10, at(0, 0))]).await.unwrap();
        let oversized = Event::new(
            Transfer::ABI,
            [
                ("from", Token::Address(b)),
                ("to", Token::Address(c)),
                ("value", Token::Uint(U256::MAX)),
            ],
            at(1, 0),
        );

        assert!(handle_events(&mappings, &[oversized]).await.is_err());

        let reader = RepoReader::new(&mappings.repo);
        let analytics = reader.analytics().await;
        assert_eq!(analytics.total_transfers, U256::one());
        assert_eq!(analytics.unique_holders, 1);
        assert_eq!(reader.holder(&b).await.unwrap().transaction_count, 1);
        assert!(reader.holder(&c).await.is_none());
    }

    #[tokio::test]
    pub async fn fails_on_a_log_without_block_number() {
        let mut log = transfer_log(wallet(1), wallet(2), 5, at(0, 0));
        log.block_number = None;

        let result = handle_logs(&test_runner::new_mappings(), &[(log, 0)]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Event(EventError::MissingProvenance("block number")))
        ));
    }
}
