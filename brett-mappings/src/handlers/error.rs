use std::fmt;

use crate::{ParamError, RepoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    Repo(RepoError),
    Param(ParamError),
    Overflow(&'static str),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Repo(error) => write!(f, "repo error: {error}"),
            HandlerError::Param(error) => write!(f, "malformed payload: {error}"),
            HandlerError::Overflow(field) => write!(f, "{field} overflowed"),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<RepoError> for HandlerError {
    fn from(value: RepoError) -> Self {
        HandlerError::Repo(value)
    }
}

impl From<ParamError> for HandlerError {
    fn from(value: ParamError) -> Self {
        HandlerError::Param(value)
    }
}
