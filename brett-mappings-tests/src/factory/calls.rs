use brett_mappings::brett_token::call_handlers::{SET_BUY_FEES_FUNCTION, SET_SELL_FEES_FUNCTION};
use brett_mappings::{Call, Provenance};
use ethers::abi::Token;
use ethers::types::U256;

pub fn set_sell_fees_call(sell_fees: u64, provenance: Provenance) -> Call {
    fee_call(SET_SELL_FEES_FUNCTION, sell_fees, provenance)
}

pub fn set_buy_fees_call(buy_fees: u64, provenance: Provenance) -> Call {
    fee_call(SET_BUY_FEES_FUNCTION, buy_fees, provenance)
}

fn fee_call(function: &str, fees: u64, provenance: Provenance) -> Call {
    Call::new(
        function,
        provenance.contract_address,
        provenance.transaction_hash,
        (provenance.block_number, provenance.block_timestamp),
    )
    .with_outputs(vec![Token::Uint(U256::from(fees))])
}
