use crate::events::Event;
use crate::{EventParam, Repo};

use super::error::HandlerError;
use super::handler_context::HandlerContext;

#[async_trait::async_trait]
pub trait PureHandler: Send + Sync {
    /// The human-readable ABI of the event being handled.
    /// For example, an ERC20 Transfer event's ABI is:
    /// event Transfer(address indexed from, address indexed to, uint256 value)
    fn abi(&self) -> &'static str;
    async fn handle_event<'a>(&self, context: PureHandlerContext<'a>) -> Result<(), HandlerError>;
}

#[derive(Clone)]
pub struct PureHandlerContext<'a> {
    pub event: Event,
    pub(crate) repo: &'a dyn Repo,
}

impl<'a> PureHandlerContext<'a> {
    pub fn new(event: &Event, repo: &'a dyn Repo) -> Self {
        Self {
            event: event.clone(),
            repo,
        }
    }

    pub fn get_event_params(&self) -> EventParam {
        self.event.get_params()
    }
}

impl<'a> HandlerContext for PureHandlerContext<'a> {
    fn get_repo(&self) -> &dyn Repo {
        self.repo
    }

    fn get_block_timestamp(&self) -> u64 {
        self.event.get_block_timestamp()
    }
}
