//! Handlers and entities of the Brett token contract.
pub mod analytics;
pub mod call_handlers;
pub mod event_handlers;
pub mod holders;
pub mod log_records;
pub mod settings;

use crate::Contract;

pub use analytics::{get_or_create_analytics, TokenAnalytics, ANALYTICS_ID};
pub use call_handlers::{SetBuyFeesCallHandler, SetSellFeesCallHandler};
pub use event_handlers::{
    LogRecordHandler, OwnershipTransferredHandler, SetBuyFeesHandler, SwapAndLiquifyHandler,
    TokensAirdroppedHandler, TransferHandler,
};
pub use holders::{address_key, get_or_create_holder, Holder};
pub use log_records::{
    Approval, DevelopmentWalletUpdated, ExcludeFromFees, ExcludeFromLimits, LiquidityWalletUpdated,
    LogRecord, MarketingWalletUpdated, OwnershipTransferred, SetAutomatedMarketMakerPair,
    SwapAndLiquify, TokensAirdropped, Transfer,
};
pub use settings::{get_or_create_settings, GlobalSettings, SETTINGS_ID};

pub const CONTRACT_NAME: &str = "BrettToken";

/// The Brett token contract with exactly one handler per event and call.
pub fn contract(address: &str, start_block_number: u64) -> Contract {
    Contract::new(CONTRACT_NAME)
        .add_address(address, start_block_number)
        .add_handler(LogRecordHandler::<Approval>::new())
        .add_handler(TransferHandler)
        .add_handler(SetBuyFeesHandler)
        .add_handler(LogRecordHandler::<ExcludeFromFees>::new())
        .add_handler(LogRecordHandler::<ExcludeFromLimits>::new())
        .add_handler(OwnershipTransferredHandler)
        .add_handler(LogRecordHandler::<SetAutomatedMarketMakerPair>::new())
        .add_handler(SwapAndLiquifyHandler)
        .add_handler(TokensAirdroppedHandler)
        .add_handler(LogRecordHandler::<DevelopmentWalletUpdated>::new())
        .add_handler(LogRecordHandler::<LiquidityWalletUpdated>::new())
        .add_handler(LogRecordHandler::<MarketingWalletUpdated>::new())
        .add_call_handler(SetBuyFeesCallHandler)
        .add_call_handler(SetSellFeesCallHandler)
}
