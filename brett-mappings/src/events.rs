mod event;
mod params;

pub use event::{Event, EventError, Provenance};
pub use params::{CallParam, EventParam, ParamError};

pub(crate) use event::hashes;
