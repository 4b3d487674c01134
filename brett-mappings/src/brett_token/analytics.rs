use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::handlers::{HandlerContext, HandlerError};
use crate::states::Entity;
use crate::RepoError;

use super::log_records::Transfer;

pub const ANALYTICS_ID: &str = "analytics";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAnalytics {
    pub id: String,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_transfers: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_airdropped: U256,
    pub unique_holders: u32,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_supply: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_liquidity_added: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_burned: U256,
    pub block_timestamp: u64,
}

impl Entity for TokenAnalytics {
    fn entity_type() -> &'static str {
        "TokenAnalytics"
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

pub async fn get_or_create_analytics<C: HandlerContext>(
    context: &C,
) -> Result<TokenAnalytics, RepoError> {
    TokenAnalytics::get_or_create(ANALYTICS_ID, context, TokenAnalytics::new).await
}

impl TokenAnalytics {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            total_transfers: U256::zero(),
            total_airdropped: U256::zero(),
            unique_holders: 0,
            total_supply: U256::zero(),
            total_liquidity_added: U256::zero(),
            total_burned: U256::zero(),
            block_timestamp: 0,
        }
    }

    /// Counts every transfer. Transfers out of the zero address mint into
    /// `total_supply`, transfers into it feed `total_burned`.
    pub fn record_transfer(
        &mut self,
        transfer: &Transfer,
        receiver_is_new: bool,
    ) -> Result<(), HandlerError> {
        self.total_transfers = checked_add(self.total_transfers, U256::one(), "totalTransfers")?;

        if transfer.from == Address::zero() {
            self.total_supply = checked_add(self.total_supply, transfer.value, "totalSupply")?;
        }
        if transfer.to == Address::zero() {
            self.total_burned = checked_add(self.total_burned, transfer.value, "totalBurned")?;
        }
        if receiver_is_new {
            self.unique_holders =
                self.unique_holders.checked_add(1).ok_or(HandlerError::Overflow("uniqueHolders"))?;
        }

        self.block_timestamp = transfer.block_timestamp;

        Ok(())
    }

    pub fn record_liquidity(
        &mut self,
        tokens_into_liquidity: U256,
        block_timestamp: u64,
    ) -> Result<(), HandlerError> {
        self.total_liquidity_added = checked_add(
            self.total_liquidity_added,
            tokens_into_liquidity,
            "totalLiquidityAdded",
        )?;
        self.block_timestamp = block_timestamp;

        Ok(())
    }

    pub fn record_airdrop(
        &mut self,
        total_tokens: U256,
        block_timestamp: u64,
    ) -> Result<(), HandlerError> {
        self.total_airdropped = checked_add(self.total_airdropped, total_tokens, "totalAirdropped")?;
        self.block_timestamp = block_timestamp;

        Ok(())
    }
}

pub(super) fn checked_add(
    current: U256,
    amount: U256,
    field: &'static str,
) -> Result<U256, HandlerError> {
    current.checked_add(amount).ok_or(HandlerError::Overflow(field))
}
