use brett_mappings::brett_token::{LogRecord, Transfer};
use brett_mappings::{ContractEvent, Provenance};
use ethers::abi::{encode, Token};
use ethers::types::{Address, Bytes, Log, H256, U256, U64};

/// A raw ERC20 Transfer log as a JSON-RPC node would return it.
pub fn transfer_log(from: Address, to: Address, value: u64, provenance: Provenance) -> Log {
    let signature = ContractEvent::new(Transfer::ABI).unwrap().value.signature();

    Log {
        address: provenance.contract_address,
        topics: vec![signature, address_topic(from), address_topic(to)],
        data: Bytes::from(encode(&[Token::Uint(U256::from(value))])),
        block_hash: Some(H256::from_low_u64_be(provenance.block_number)),
        block_number: Some(U64::from(provenance.block_number)),
        transaction_hash: Some(provenance.transaction_hash),
        transaction_index: Some(U64::from(0)),
        log_index: Some(U256::from(provenance.log_index)),
        transaction_log_index: None,
        log_type: None,
        removed: Some(false),
    }
}

fn address_topic(address: Address) -> H256 {
    H256::from_slice(&encode(&[Token::Address(address)]))
}
