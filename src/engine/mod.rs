//! Dispatch engine.
//!
//! # Key Concepts
//!
//! - **Engine**: holds a shared, read-only transition table and dispatches
//!   events against resources
//! - **DispatchContext**: cancellation token, deadline and trace id handed
//!   to event actions untouched
//! - **DispatchError**: configuration mistakes vs. rejected transitions
//!
//! Dispatch reads the resource's state, looks it up in the table, checks
//! the event's declared name against the permitted list, and then runs the
//! event's action once. Nothing is retried.

mod config;
mod context;
mod error;
mod machine;

pub use config::EngineConfig;
pub use context::DispatchContext;
pub use error::{DispatchError, ErrorCategory};
pub use machine::{Engine, Observation};
