use ethers::types::U256;
use serde::{Deserialize, Serialize};

use crate::handlers::HandlerContext;
use crate::states::Entity;
use crate::RepoError;

pub const SETTINGS_ID: &str = "settings";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub id: String,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub buy_fees: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub sell_fees: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub max_transaction: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub max_wallet: U256,
    pub trading_active: bool,
    pub swap_enabled: bool,
    pub block_timestamp: u64,
}

impl Entity for GlobalSettings {
    fn entity_type() -> &'static str {
        "GlobalSettings"
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

pub async fn get_or_create_settings<C: HandlerContext>(
    context: &C,
) -> Result<GlobalSettings, RepoError> {
    GlobalSettings::get_or_create(SETTINGS_ID, context, GlobalSettings::new).await
}

impl GlobalSettings {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            buy_fees: U256::zero(),
            sell_fees: U256::zero(),
            max_transaction: U256::zero(),
            max_wallet: U256::zero(),
            trading_active: true,
            swap_enabled: true,
            block_timestamp: 0,
        }
    }

    pub fn set_buy_fees(&mut self, buy_fees: U256, block_timestamp: u64) {
        self.buy_fees = buy_fees;
        self.block_timestamp = block_timestamp;
    }

    /// Overwrites only the fee; the update marker is left alone.
    pub fn set_sell_fees(&mut self, sell_fees: U256) {
        self.sell_fees = sell_fees;
    }

    /// Any ownership change switches trading back on.
    pub fn reactivate_trading(&mut self, block_timestamp: u64) {
        self.trading_active = true;
        self.block_timestamp = block_timestamp;
    }
}
