use std::collections::HashMap;
use std::fmt;

use ethers::abi::{LogParam, RawLog, Token};
use ethers::types::{Address, Log, H256, U256};

use crate::ContractEvent;

use super::params::EventParam;

/// Where a decoded event was observed on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    pub contract_address: Address,
    pub transaction_hash: H256,
    pub log_index: u32,
    pub block_number: u64,
    pub block_timestamp: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub abi: String,
    parameters: HashMap<String, Token>,
    provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    MissingProvenance(&'static str),
    LogIndexOutOfRange,
    Decode { abi: String, reason: String },
    UnknownTopic(H256),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::MissingProvenance(field) => write!(f, "log has no {field}"),
            EventError::LogIndexOutOfRange => write!(f, "log index does not fit 32 bits"),
            EventError::Decode { abi, reason } => write!(f, "cannot decode {abi}: {reason}"),
            EventError::UnknownTopic(topic) => {
                write!(f, "no registered event for topic {}", hashes::h256_to_string(topic))
            }
        }
    }
}

impl std::error::Error for EventError {}

impl Event {
    /// Builds an event from parameters the host already decoded.
    pub fn new<K: ToString>(
        abi: &str,
        parameters: impl IntoIterator<Item = (K, Token)>,
        provenance: Provenance,
    ) -> Self {
        Self {
            abi: abi.to_string(),
            parameters: parameters.into_iter().map(|(name, token)| (name.to_string(), token)).collect(),
            provenance,
        }
    }

    /// Decodes a raw log against `contract_event`. The log must carry its
    /// transaction hash, log index and block number.
    pub fn from_log(
        log: &Log,
        contract_event: &ContractEvent,
        block_timestamp: u64,
    ) -> Result<Self, EventError> {
        let transaction_hash =
            log.transaction_hash.ok_or(EventError::MissingProvenance("transaction hash"))?;
        let log_index = log.log_index.ok_or(EventError::MissingProvenance("log index"))?;
        if log_index > U256::from(u32::MAX) {
            return Err(EventError::LogIndexOutOfRange);
        }
        let block_number = log.block_number.ok_or(EventError::MissingProvenance("block number"))?;

        let log_params = contract_event
            .value
            .parse_log(RawLog::from(log.clone()))
            .map_err(|error| EventError::Decode {
                abi: contract_event.abi.clone(),
                reason: error.to_string(),
            })?
            .params;

        Ok(Self {
            abi: contract_event.abi.clone(),
            parameters: Self::log_params_to_parameters(&log_params),
            provenance: Provenance {
                contract_address: log.address,
                transaction_hash,
                log_index: log_index.as_u32(),
                block_number: block_number.as_u64(),
                block_timestamp,
            },
        })
    }

    pub fn get_transaction_hash(&self) -> H256 {
        self.provenance.transaction_hash
    }
    pub fn get_block_number(&self) -> u64 {
        self.provenance.block_number
    }
    pub fn get_block_timestamp(&self) -> u64 {
        self.provenance.block_timestamp
    }
    pub fn get_log_index(&self) -> u32 {
        self.provenance.log_index
    }

    pub fn get_params(&self) -> EventParam {
        EventParam::new(&self.parameters)
    }

    /// Key shared by every log record of this event: the transaction hash
    /// bytes followed by the log index as a little-endian `i32`.
    pub fn log_record_id(&self) -> String {
        let mut bytes = self.provenance.transaction_hash.as_bytes().to_vec();
        bytes.extend_from_slice(&(self.provenance.log_index as i32).to_le_bytes());

        hashes::bytes_to_string(&bytes)
    }

    fn log_params_to_parameters(log_params: &[LogParam]) -> HashMap<String, Token> {
        log_params.iter().fold(HashMap::new(), |mut parameters, log_param| {
            parameters.insert(log_param.name.to_string(), log_param.value.clone());

            parameters
        })
    }
}

pub(crate) mod hashes {
    use ethers::types::{H160, H256};

    pub fn h160_to_string(h160: &H160) -> String {
        format!("{h160:#x}")
    }

    pub fn h256_to_string(h256: &H256) -> String {
        format!("{h256:#x}")
    }

    pub fn bytes_to_string(bytes: &[u8]) -> String {
        bytes.iter().fold(String::from("0x"), |mut hex, byte| {
            hex.push_str(&format!("{byte:02x}"));
            hex
        })
    }
}
