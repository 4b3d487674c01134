#[cfg(test)]
mod tests {
    use brett_mappings::{handle_events, U256};

    use crate::factory::{
        approval_event, at, swap_and_liquify_event, tokens_airdropped_event, transfer_event,
        wallet,
    };
    use crate::test_runner::{self, RepoReader};

    #[tokio::test]
    pub async fn is_absent_until_first_touched() {
        let mappings = test_runner::run_events(&[approval_event(wallet(1), wallet(2), 5, at(0, 0))])
            .await
            .unwrap();

        assert!(RepoReader::new(&mappings.repo).stored_analytics().await.is_none());
    }

    #[tokio::test]
    pub async fn adds_liquidity_from_swap_and_liquify() {
        let mappings = test_runner::run_events(&[
            swap_and_liquify_event(1_000, 7, 400, at(0, 0)),
            swap_and_liquify_event(2_000, 9, 600, at(1, 0)),
        ])
        .await
        .unwrap();

        let analytics = RepoReader::new(&mappings.repo).stored_analytics().await.unwrap();
        assert_eq!(analytics.total_liquidity_added, U256::from(1_000));
        assert_eq!(analytics.total_transfers, U256::zero());
        assert_eq!(analytics.block_timestamp, at(1, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn adds_airdropped_tokens() {
        let mappings = test_runner::run_events(&[
            tokens_airdropped_event(10, 5_000, at(0, 0)),
            tokens_airdropped_event(3, 1_500, at(2, 0)),
        ])
        .await
        .unwrap();

        let analytics = RepoReader::new(&mappings.repo).stored_analytics().await.unwrap();
        assert_eq!(analytics.total_airdropped, U256::from(6_500));
        assert_eq!(analytics.block_timestamp, at(2, 0).block_timestamp);
    }

    #[tokio::test]
    pub async fn counts_every_transfer_once() {
        let mappings = test_runner::new_mappings();
        let reader = RepoReader::new(&mappings.repo);

        for offset in 0..5 {
            let event = transfer_event(wallet(offset), wallet(offset + 1), 1, at(offset, 0));
            handle_events(&mappings, &[event]).await.unwrap();

            assert_eq!(reader.analytics().await.total_transfers, U256::from(offset + 1));
        }
    }

    #[tokio::test]
    pub async fn keeps_a_single_instance() {
        let mappings = test_runner::run_events(&[
            transfer_event(wallet(1), wallet(2), 1, at(0, 0)),
            swap_and_liquify_event(1, 1, 1, at(1, 0)),
            tokens_airdropped_event(1, 1, at(2, 0)),
        ])
        .await
        .unwrap();

        assert_eq!(mappings.repo.count("TokenAnalytics").await, 1);
    }
}
