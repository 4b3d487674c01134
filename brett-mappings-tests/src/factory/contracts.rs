use brett_mappings::{brett_token, Contract};

pub const BRETT_CONTRACT_ADDRESS: &str = "0x532f27101965dd16442E59d40670FaF5eBB142E4";
pub const BRETT_CONTRACT_START_BLOCK_NUMBER: u64 = 2_631_200;

pub fn brett_contract() -> Contract {
    brett_token::contract(BRETT_CONTRACT_ADDRESS, BRETT_CONTRACT_START_BLOCK_NUMBER)
}
