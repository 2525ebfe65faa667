//! fsm-engine: a table-driven finite state machine engine
//!
//! Given a declarative table of which events may fire in which states, the
//! engine checks whether a caller-supplied event may legally fire against a
//! caller-supplied resource and, if so, runs the event's action exactly once.
//!
//! # Core Concepts
//!
//! - **State**: an opaque token for one lifecycle stage, with a reserved
//!   [`State::UNKNOWN`] sentinel
//! - **Resource**: anything that can report its current state
//! - **Event**: a named, executable transition trigger
//! - **TransitionTable**: state → ordered list of permitted event names
//! - **Engine**: validates and dispatches; holds no business state
//!
//! The engine does not persist state, retry, or lock resources. A resource
//! is passed by `&mut`, so concurrent dispatches on the same resource must
//! be serialized by the caller.
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{
//!     event_names, states, DispatchContext, DispatchError, Engine, Event, EventError, EventName,
//!     Resource, State, TransitionTable,
//! };
//!
//! states! {
//!     const PAID = "paid";
//!     const COMPLETED = "completed";
//! }
//!
//! event_names! {
//!     const COMPLETE = "Complete";
//! }
//!
//! struct Order {
//!     status: String,
//!     amount: i64,
//! }
//!
//! impl Resource for Order {
//!     fn current_state(&self) -> State {
//!         match self.status.as_str() {
//!             "STATUS_PAID" => PAID,
//!             "STATUS_COMPLETED" => COMPLETED,
//!             _ => State::UNKNOWN,
//!         }
//!     }
//! }
//!
//! struct Complete;
//!
//! impl Event<Order> for Complete {
//!     fn name(&self) -> EventName {
//!         COMPLETE
//!     }
//!
//!     fn on_event(&self, _ctx: &DispatchContext, order: &mut Order) -> Result<(), EventError> {
//!         if order.amount <= 0 {
//!             return Err(EventError::new("amount must be greater than zero"));
//!         }
//!         order.status = "STATUS_COMPLETED".to_string();
//!         Ok(())
//!     }
//! }
//!
//! let table = TransitionTable::new()
//!     .with_state(PAID, [COMPLETE])
//!     .with_state(COMPLETED, []);
//! let engine = Engine::new(table);
//! let ctx = DispatchContext::new();
//!
//! let mut order = Order { status: "STATUS_PAID".into(), amount: 100 };
//! engine.dispatch(&ctx, &Complete, &mut order).unwrap();
//! assert_eq!(order.current_state(), COMPLETED);
//!
//! let err = engine.dispatch(&ctx, &Complete, &mut order).unwrap_err();
//! assert!(matches!(err, DispatchError::TransitionNotAllowed { .. }));
//! ```

pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{AsyncEvent, Event, EventError, EventName, Resource, State};
pub use crate::engine::{
    DispatchContext, DispatchError, Engine, EngineConfig, ErrorCategory, Observation,
};
pub use crate::table::{TableIssue, TransitionTable};
