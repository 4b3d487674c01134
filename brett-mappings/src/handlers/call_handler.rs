use crate::{Call, Repo};

use super::error::HandlerError;
use super::handler_context::HandlerContext;

/// Handles decoded calls to a contract function, matched by signature.
#[async_trait::async_trait]
pub trait CallHandler: Send + Sync {
    /// Function signature, for example `setSellFees(uint256)`.
    fn function(&self) -> &'static str;
    async fn handle_call<'a>(&self, context: CallHandlerContext<'a>) -> Result<(), HandlerError>;
}

#[derive(Clone)]
pub struct CallHandlerContext<'a> {
    pub call: Call,
    pub(crate) repo: &'a dyn Repo,
}

impl<'a> CallHandlerContext<'a> {
    pub fn new(call: &Call, repo: &'a dyn Repo) -> Self {
        Self {
            call: call.clone(),
            repo,
        }
    }
}

impl<'a> HandlerContext for CallHandlerContext<'a> {
    fn get_repo(&self) -> &dyn Repo {
        self.repo
    }

    fn get_block_timestamp(&self) -> u64 {
        self.call.get_block_timestamp()
    }
}
