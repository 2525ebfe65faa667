//! Core identity types and the two extension points.
//!
//! - `State` and `EventName` tokens
//! - `Resource`: reports the current state of a business object
//! - `Event` / `AsyncEvent`: named, executable transition triggers
//!
//! Embedding applications implement `Resource` and `Event`; the engine
//! only ever reads the former and invokes the latter.

mod event;
mod macros;
mod resource;
mod state;

pub use event::{AsyncEvent, Event, EventError};
pub use resource::Resource;
pub use state::{EventName, State};
