use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use ethers::abi::{Event, HumanReadableParser};
use ethers::types::H256;

use crate::config::ConfigError;
use crate::handlers::{CallHandler, PureHandler};

pub type ContractEventTopic = H256;

#[derive(Debug, Clone)]
pub struct ContractEvent {
    pub abi: String,
    pub value: Event,
}

impl ContractEvent {
    pub fn new(abi: &str) -> Result<Self, ConfigError> {
        let value = HumanReadableParser::parse_event(abi).map_err(|error| {
            ConfigError::InvalidAbi {
                abi: abi.to_string(),
                reason: error.to_string(),
            }
        })?;

        Ok(Self {
            abi: abi.to_string(),
            value,
        })
    }
}

type EventAbi = &'static str;
type FunctionSignature = &'static str;

#[derive(Clone)]
pub struct Contract {
    pub addresses: Vec<ContractAddress>,
    pub name: String,
    pub pure_handlers: HashMap<EventAbi, Arc<dyn PureHandler>>,
    pub call_handlers: HashMap<FunctionSignature, Arc<dyn CallHandler>>,
    duplicate_registrations: Vec<&'static str>,
}

impl Contract {
    pub fn new(name: &str) -> Self {
        Self {
            addresses: vec![],
            name: name.to_string(),
            pure_handlers: HashMap::new(),
            call_handlers: HashMap::new(),
            duplicate_registrations: vec![],
        }
    }

    pub fn add_address(mut self, address: &str, start_block_number: u64) -> Self {
        self.addresses.push(ContractAddress::new(&self.name, address, start_block_number));

        self
    }

    /// Registers `handler` for its event ABI. A second handler for the same
    /// ABI is kept out and reported by [`crate::Config::build`].
    pub fn add_handler(mut self, handler: impl PureHandler + 'static) -> Self {
        let abi = handler.abi();

        if self.pure_handlers.contains_key(abi) {
            self.duplicate_registrations.push(abi);
        } else {
            self.pure_handlers.insert(abi, Arc::new(handler));
        }

        self
    }

    pub fn add_call_handler(mut self, handler: impl CallHandler + 'static) -> Self {
        let function = handler.function();

        if self.call_handlers.contains_key(function) {
            self.duplicate_registrations.push(function);
        } else {
            self.call_handlers.insert(function, Arc::new(handler));
        }

        self
    }

    pub fn get_event_abis(&self) -> Vec<EventAbi> {
        let mut event_abis: Vec<_> = self.pure_handlers.keys().copied().collect();
        event_abis.sort_unstable();

        event_abis
    }

    pub fn build_events(&self) -> Result<Vec<ContractEvent>, ConfigError> {
        self.get_event_abis().iter().map(|abi| ContractEvent::new(abi)).collect()
    }

    pub(crate) fn get_duplicate_registrations(&self) -> &[&'static str] {
        &self.duplicate_registrations
    }

    pub fn has_handlers(&self) -> bool {
        !self.pure_handlers.is_empty() || !self.call_handlers.is_empty()
    }
}

impl Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("name", &self.name)
            .field("addresses", &self.addresses)
            .finish()
    }
}

pub fn get_pure_handlers_by_event_abi(
    contracts: &[Contract],
) -> HashMap<EventAbi, Arc<dyn PureHandler>> {
    contracts.iter().fold(HashMap::new(), |mut handlers_by_event_abi, contract| {
        contract.pure_handlers.iter().for_each(|(event_abi, handler)| {
            handlers_by_event_abi.insert(*event_abi, handler.clone());
        });
        handlers_by_event_abi
    })
}

pub fn get_call_handlers_by_function(
    contracts: &[Contract],
) -> HashMap<FunctionSignature, Arc<dyn CallHandler>> {
    contracts.iter().fold(HashMap::new(), |mut handlers_by_function, contract| {
        contract.call_handlers.iter().for_each(|(function, handler)| {
            handlers_by_function.insert(*function, handler.clone());
        });
        handlers_by_function
    })
}

pub fn group_events_by_topics(
    contracts: &[Contract],
) -> Result<HashMap<ContractEventTopic, ContractEvent>, ConfigError> {
    let mut events_by_topics = HashMap::new();

    for contract in contracts {
        for event in contract.build_events()? {
            events_by_topics.insert(event.value.signature(), event);
        }
    }

    Ok(events_by_topics)
}

pub fn get_contract_addresses(contracts: &[Contract]) -> Vec<ContractAddress> {
    contracts.iter().flat_map(|c| c.addresses.iter().cloned()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAddress {
    pub contract_name: String,
    pub address: String,
    pub start_block_number: u64,
}

impl ContractAddress {
    pub fn new(contract_name: &str, address: &str, start_block_number: u64) -> Self {
        ContractAddress {
            contract_name: contract_name.to_string(),
            address: address.to_lowercase(),
            start_block_number,
        }
    }

    /// Whether a log at `block_number` from `address` belongs to this contract.
    pub fn covers(&self, address: &str, block_number: u64) -> bool {
        self.address == address.to_lowercase() && block_number >= self.start_block_number
    }
}
