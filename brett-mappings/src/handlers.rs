mod call_handler;
mod error;
mod handle_events;
mod handler_context;
mod pure_handler;

pub use call_handler::{CallHandler, CallHandlerContext};
pub use error::HandlerError;
pub use handle_events::{handle_calls, handle_events, handle_logs};
pub use handler_context::HandlerContext;
pub use pure_handler::{PureHandler, PureHandlerContext};
