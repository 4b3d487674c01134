//! Projects decoded Brett token events and calls into keyed entities:
//! immutable per-event log records, the `TokenAnalytics` and
//! `GlobalSettings` singletons, and one `Holder` ledger per address.
//!
//! Handlers run strictly one after another. Each one loads what it needs
//! from the [`Repo`], applies its update and saves before the next starts.
pub mod brett_token;
mod calls;
mod config;
mod contracts;
pub mod events;
pub mod handlers;
pub mod logger;
mod repos;
pub mod states;

use std::fmt;

pub use calls::Call;
pub use config::{Config, ConfigError, Mappings};
pub use contracts::{Contract, ContractAddress, ContractEvent};
pub use events::{CallParam, Event, EventError, EventParam, ParamError, Provenance};
pub use handlers::{
    handle_calls, handle_events, handle_logs, CallHandler, CallHandlerContext, HandlerContext,
    HandlerError, PureHandler, PureHandlerContext,
};
pub use repos::*;

pub use ethers::types::{Address, I256, U256};

#[derive(Debug)]
pub enum MappingsError {
    Event(EventError),
    NoHandler(String),
    Handler { trigger: String, error: HandlerError },
}

impl fmt::Display for MappingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingsError::Event(event_error) => write!(f, "Event Error: {event_error}"),
            MappingsError::NoHandler(trigger) => write!(f, "No handler registered for {trigger}"),
            MappingsError::Handler { trigger, error } => {
                write!(f, "Handler for {trigger} failed: {error}")
            }
        }
    }
}

impl std::error::Error for MappingsError {}

impl From<EventError> for MappingsError {
    fn from(value: EventError) -> Self {
        MappingsError::Event(value)
    }
}
