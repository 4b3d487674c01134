mod calls;
mod contracts;
mod events;
mod logs;

pub use calls::*;
pub use contracts::*;
pub use events::*;
pub use logs::*;
