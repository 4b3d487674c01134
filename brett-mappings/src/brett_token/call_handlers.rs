use crate::handlers::{CallHandler, CallHandlerContext, HandlerContext, HandlerError};
use crate::states::Entity;

use super::settings::get_or_create_settings;

pub const SET_BUY_FEES_FUNCTION: &str = "setBuyFees(uint256)";
pub const SET_SELL_FEES_FUNCTION: &str = "setSellFees(uint256)";

pub struct SetBuyFeesCallHandler;

#[async_trait::async_trait]
impl CallHandler for SetBuyFeesCallHandler {
    fn function(&self) -> &'static str {
        SET_BUY_FEES_FUNCTION
    }

    async fn handle_call<'a>(&self, context: CallHandlerContext<'a>) -> Result<(), HandlerError> {
        let buy_fees = context.call.get_outputs().get_uint(0)?;

        let mut settings = get_or_create_settings(&context).await?;
        settings.set_buy_fees(buy_fees, context.get_block_timestamp());
        settings.save(&context).await?;

        Ok(())
    }
}

pub struct SetSellFeesCallHandler;

#[async_trait::async_trait]
impl CallHandler for SetSellFeesCallHandler {
    fn function(&self) -> &'static str {
        SET_SELL_FEES_FUNCTION
    }

    async fn handle_call<'a>(&self, context: CallHandlerContext<'a>) -> Result<(), HandlerError> {
        let sell_fees = context.call.get_outputs().get_uint(0)?;

        let mut settings = get_or_create_settings(&context).await?;
        settings.set_sell_fees(sell_fees);
        settings.save(&context).await?;

        Ok(())
    }
}
