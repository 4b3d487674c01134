use std::marker::PhantomData;

use crate::handlers::{HandlerContext, HandlerError, PureHandler, PureHandlerContext};
use crate::states::Entity;

use super::analytics::get_or_create_analytics;
use super::holders::{address_key, get_or_create_holder, Holder};
use super::log_records::{
    record, LogRecord, OwnershipTransferred, SwapAndLiquify, TokensAirdropped, Transfer,
};
use super::settings::get_or_create_settings;

pub const SET_BUY_FEES_EVENT_ABI: &str = "event SetBuyFees(uint256 buyFees)";

/// Records the event and touches nothing else.
pub struct LogRecordHandler<T: LogRecord> {
    record: PhantomData<fn() -> T>,
}

impl<T: LogRecord> LogRecordHandler<T> {
    pub fn new() -> Self {
        Self {
            record: PhantomData,
        }
    }
}

impl<T: LogRecord> Default for LogRecordHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T: LogRecord> PureHandler for LogRecordHandler<T> {
    fn abi(&self) -> &'static str {
        T::ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        record::<T>(&context).await?;

        Ok(())
    }
}

/// Counts the transfer and moves `value` from the sender's ledger to the
/// receiver's. Every update is applied in memory first; nothing is saved
/// unless all of them succeed.
pub struct TransferHandler;

#[async_trait::async_trait]
impl PureHandler for TransferHandler {
    fn abi(&self) -> &'static str {
        Transfer::ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        let transfer = Transfer::from_event(&context.event)?;

        // Must run before either holder is created below.
        let receiver_is_new = Holder::load(&address_key(&transfer.to), &context).await?.is_none();

        let mut analytics = get_or_create_analytics(&context).await?;
        analytics.record_transfer(&transfer, receiver_is_new)?;

        let mut sender = get_or_create_holder(&transfer.from, &context).await?;
        sender.debit(transfer.value)?;

        let receiver = if transfer.from == transfer.to {
            sender.credit(transfer.value)?;
            None
        } else {
            let mut receiver = get_or_create_holder(&transfer.to, &context).await?;
            receiver.credit(transfer.value)?;
            Some(receiver)
        };

        transfer.save(&context).await?;
        analytics.save(&context).await?;
        sender.save(&context).await?;
        if let Some(receiver) = &receiver {
            receiver.save(&context).await?;
        }

        tracing::debug!(
            from = %sender.id,
            to = %address_key(&transfer.to),
            value = %transfer.value,
            receiver_is_new,
            "applied transfer"
        );

        Ok(())
    }
}

pub struct SetBuyFeesHandler;

#[async_trait::async_trait]
impl PureHandler for SetBuyFeesHandler {
    fn abi(&self) -> &'static str {
        SET_BUY_FEES_EVENT_ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        let buy_fees = context.get_event_params().get_uint("buyFees")?;

        let mut settings = get_or_create_settings(&context).await?;
        settings.set_buy_fees(buy_fees, context.get_block_timestamp());
        settings.save(&context).await?;

        Ok(())
    }
}

pub struct OwnershipTransferredHandler;

#[async_trait::async_trait]
impl PureHandler for OwnershipTransferredHandler {
    fn abi(&self) -> &'static str {
        OwnershipTransferred::ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        let ownership_transferred = OwnershipTransferred::from_event(&context.event)?;

        let mut settings = get_or_create_settings(&context).await?;
        settings.reactivate_trading(ownership_transferred.block_timestamp);

        ownership_transferred.save(&context).await?;
        settings.save(&context).await?;

        Ok(())
    }
}

pub struct SwapAndLiquifyHandler;

#[async_trait::async_trait]
impl PureHandler for SwapAndLiquifyHandler {
    fn abi(&self) -> &'static str {
        SwapAndLiquify::ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        let swap_and_liquify = SwapAndLiquify::from_event(&context.event)?;

        let mut analytics = get_or_create_analytics(&context).await?;
        analytics.record_liquidity(
            swap_and_liquify.tokens_into_liquidity,
            swap_and_liquify.block_timestamp,
        )?;

        swap_and_liquify.save(&context).await?;
        analytics.save(&context).await?;

        Ok(())
    }
}

pub struct TokensAirdroppedHandler;

#[async_trait::async_trait]
impl PureHandler for TokensAirdroppedHandler {
    fn abi(&self) -> &'static str {
        TokensAirdropped::ABI
    }

    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError> {
        let tokens_airdropped = TokensAirdropped::from_event(&context.event)?;

        let mut analytics = get_or_create_analytics(&context).await?;
        analytics
            .record_airdrop(tokens_airdropped.total_tokens, tokens_airdropped.block_timestamp)?;

        tokens_airdropped.save(&context).await?;
        analytics.save(&context).await?;

        Ok(())
    }
}
