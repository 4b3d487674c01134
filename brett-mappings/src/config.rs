use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::contracts::{self, ContractEventTopic};
use crate::{CallHandler, Contract, ContractAddress, ContractEvent, PureHandler, Repo};

pub enum ConfigError {
    NoContract,
    NoHandler(String),
    DuplicateHandler(String),
    InvalidAbi { abi: String, reason: String },
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoContract => {
                write!(f, "At least one contract is required")
            }
            ConfigError::NoHandler(contract_name) => {
                write!(f, "Contract {contract_name} has no handler")
            }
            ConfigError::DuplicateHandler(trigger) => {
                write!(f, "More than one handler is registered for {trigger}")
            }
            ConfigError::InvalidAbi { abi, reason } => {
                write!(f, "Invalid event ABI {abi}: {reason}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config<R: Repo> {
    pub repo: R,
    pub contracts: Vec<Contract>,
}

impl<R: Repo> Config<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            contracts: vec![],
        }
    }

    pub fn add_contract(mut self, contract: Contract) -> Self {
        self.contracts.push(contract);

        self
    }

    /// Validates the registrations and resolves every handler lookup once,
    /// so dispatching does not repeat the work per event.
    pub fn build(self) -> Result<Mappings<R>, ConfigError> {
        self.validate()?;

        Ok(Mappings {
            pure_handlers_by_event_abi: contracts::get_pure_handlers_by_event_abi(&self.contracts),
            call_handlers_by_function: contracts::get_call_handlers_by_function(&self.contracts),
            events_by_topics: contracts::group_events_by_topics(&self.contracts)?,
            contract_addresses: contracts::get_contract_addresses(&self.contracts),
            repo: self.repo,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.contracts.is_empty() {
            return Err(ConfigError::NoContract);
        }

        let mut triggers = HashSet::new();

        for contract in &self.contracts {
            if !contract.has_handlers() {
                return Err(ConfigError::NoHandler(contract.name.clone()));
            }

            if let Some(trigger) = contract.get_duplicate_registrations().first() {
                return Err(ConfigError::DuplicateHandler(trigger.to_string()));
            }

            let contract_triggers =
                contract.pure_handlers.keys().chain(contract.call_handlers.keys());

            for trigger in contract_triggers {
                if !triggers.insert(*trigger) {
                    return Err(ConfigError::DuplicateHandler(trigger.to_string()));
                }
            }
        }

        Ok(())
    }
}

/// A validated [`Config`], ready to dispatch events, logs and calls.
pub struct Mappings<R: Repo> {
    pub repo: R,
    pub(crate) pure_handlers_by_event_abi: HashMap<&'static str, Arc<dyn PureHandler>>,
    pub(crate) call_handlers_by_function: HashMap<&'static str, Arc<dyn CallHandler>>,
    pub(crate) events_by_topics: HashMap<ContractEventTopic, ContractEvent>,
    pub(crate) contract_addresses: Vec<ContractAddress>,
}
