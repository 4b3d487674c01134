use ethers::abi::Token;
use ethers::types::{Address, H256};

use crate::CallParam;

/// A decoded fee-query call, with the values it returned in ABI order.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Function signature, for example `setSellFees(uint256)`.
    pub function: String,
    pub to: Address,
    pub transaction_hash: H256,
    pub block_number: u64,
    pub block_timestamp: u64,
    outputs: Vec<Token>,
}

impl Call {
    pub fn new(
        function: &str,
        to: Address,
        transaction_hash: H256,
        (block_number, block_timestamp): (u64, u64),
    ) -> Self {
        Self {
            function: function.to_string(),
            to,
            transaction_hash,
            block_number,
            block_timestamp,
            outputs: vec![],
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<Token>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn get_outputs(&self) -> CallParam {
        CallParam::new(&self.outputs)
    }

    pub fn get_block_timestamp(&self) -> u64 {
        self.block_timestamp
    }
}
