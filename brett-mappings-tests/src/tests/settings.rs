#[cfg(test)]
mod tests {
    use brett_mappings::brett_token::call_handlers::SET_SELL_FEES_FUNCTION;
    use brett_mappings::brett_token::GlobalSettings;
    use brett_mappings::states::Entity;
    use brett_mappings::{
        handle_calls, handle_events, Call, HandlerError, MappingsError, ParamError, U256,
    };

    use crate::factory::{
        at, ownership_transferred_event, set_buy_fees_call, set_buy_fees_event,
        set_sell_fees_call, wallet,
    };
    use crate::test_runner::{self, RepoReader};

    #[tokio::test]
    pub async fn starts_with_trading_and_swaps_enabled() {
        let mappings = test_runner::new_mappings();
        let settings = RepoReader::new(&mappings.repo).settings().await;

        assert!(settings.trading_active);
        assert!(settings.swap_enabled);
        assert_eq!(settings.buy_fees, U256::zero());
        assert_eq!(settings.sell_fees, U256::zero());
        assert_eq!(settings.max_transaction, U256::zero());
        assert_eq!(settings.max_wallet, U256::zero());
    }

    #[tokio::test]
    pub async fn ownership_transfer_reactivates_trading() {
        let mappings = test_runner::new_mappings();
        let reader = RepoReader::new(&mappings.repo);

        let mut settings = reader.settings().await;
        settings.trading_active = false;
        settings.save(&reader).await.unwrap();

        let event = ownership_transferred_event(wallet(1), wallet(2), at(5, 0));
        handle_events(&mappings, &[event]).await.unwrap();

        let settings = reader.settings().await;
        assert!(settings.trading_active);
        assert_eq!(settings.block_timestamp, at(5, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn buy_fees_event_overwrites_fees_and_timestamp() {
        let mappings = test_runner::run_events(&[
            set_buy_fees_event(5, at(0, 0)),
            set_buy_fees_event(3, at(1, 0)),
        ])
        .await
        .unwrap();

        let settings = RepoReader::new(&mappings.repo).settings().await;
        assert_eq!(settings.buy_fees, U256::from(3));
        assert_eq!(settings.block_timestamp, at(1, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn buy_fees_call_overwrites_fees_and_timestamp() {
        let mappings = test_runner::new_mappings();

        handle_calls(&mappings, &[set_buy_fees_call(20, at(2, 0))]).await.unwrap();

        let settings = RepoReader::new(&mappings.repo).settings().await;
        assert_eq!(settings.buy_fees, U256::from(20));
        assert_eq!(settings.block_timestamp, at(2, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn sell_fees_call_leaves_timestamp_alone() {
        let mappings = test_runner::run_events(&[set_buy_fees_event(5, at(0, 0))]).await.unwrap();

        handle_calls(&mappings, &[set_sell_fees_call(25, at(3, 0))]).await.unwrap();

        let settings = RepoReader::new(&mappings.repo).settings().await;
        assert_eq!(settings.sell_fees, U256::from(25));
        assert_eq!(settings.buy_fees, U256::from(5));
        assert_eq!(settings.block_timestamp, at(0, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn fees_are_not_bounded() {
        let mappings = test_runner::new_mappings();

        handle_calls(&mappings, &[set_sell_fees_call(10_000, at(0, 0))]).await.unwrap();

        let settings = RepoReader::new(&mappings.repo).settings().await;
        assert_eq!(settings.sell_fees, U256::from(10_000));
    }

    #[tokio::test]
    pub async fn fee_calls_read_the_returned_value() {
        let provenance = at(4, 0);
        let call = Call::new(
            SET_SELL_FEES_FUNCTION,
            provenance.contract_address,
            provenance.transaction_hash,
            (provenance.block_number, provenance.block_timestamp),
        );
        let mappings = test_runner::new_mappings();

        let result = handle_calls(&mappings, &[call]).await;

        assert!(matches!(
            result,
            Err(MappingsError::Handler {
                error: HandlerError::Param(ParamError::Missing(position)),
                ..
            }) if position == "0"
        ));
        assert_eq!(mappings.repo.count(GlobalSettings::entity_type()).await, 0);
    }
}
