use std::collections::HashMap;
use std::fmt;

use ethers::abi::Token;
use ethers::types::{Address, U256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    Missing(String),
    Mistyped { param: String, expected: &'static str },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing(param) => write!(f, "parameter {param} is missing"),
            ParamError::Mistyped { param, expected } => {
                write!(f, "parameter {param} is not {expected}")
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Named parameters of a decoded event.
pub struct EventParam {
    value: HashMap<String, Token>,
}

impl EventParam {
    pub(crate) fn new(parameters: &HashMap<String, Token>) -> EventParam {
        EventParam {
            value: parameters.clone(),
        }
    }

    pub fn get_uint(&self, key: &str) -> Result<U256, ParamError> {
        into_uint(self.get_token(key)?, key)
    }
    pub fn get_bool(&self, key: &str) -> Result<bool, ParamError> {
        into_bool(self.get_token(key)?, key)
    }
    pub fn get_address(&self, key: &str) -> Result<Address, ParamError> {
        into_address(self.get_token(key)?, key)
    }

    fn get_token(&self, key: &str) -> Result<Token, ParamError> {
        self.value.get(key).cloned().ok_or_else(|| ParamError::Missing(key.to_string()))
    }
}

/// Positional values of a decoded call.
pub struct CallParam {
    values: Vec<Token>,
}

impl CallParam {
    pub(crate) fn new(values: &[Token]) -> CallParam {
        CallParam {
            values: values.to_vec(),
        }
    }

    pub fn get_uint(&self, position: usize) -> Result<U256, ParamError> {
        into_uint(self.get_token(position)?, &position.to_string())
    }

    fn get_token(&self, position: usize) -> Result<Token, ParamError> {
        self.values.get(position).cloned().ok_or_else(|| ParamError::Missing(position.to_string()))
    }
}

fn into_uint(token: Token, param: &str) -> Result<U256, ParamError> {
    token.into_uint().ok_or_else(|| mistyped(param, "an unsigned integer"))
}

fn into_bool(token: Token, param: &str) -> Result<bool, ParamError> {
    token.into_bool().ok_or_else(|| mistyped(param, "a boolean"))
}

fn into_address(token: Token, param: &str) -> Result<Address, ParamError> {
    token.into_address().ok_or_else(|| mistyped(param, "an address"))
}

fn mistyped(param: &str, expected: &'static str) -> ParamError {
    ParamError::Mistyped {
        param: param.to_string(),
        expected,
    }
}
