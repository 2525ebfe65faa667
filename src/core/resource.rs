//! Resource capability: the engine's read-only view of a stateful object.

use super::state::State;
use std::sync::Arc;

/// Anything that can report its current lifecycle state.
///
/// The state is queried fresh on every dispatch. Implementations should
/// return [`State::UNKNOWN`] when their internal status does not map to a
/// real lifecycle stage.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{Resource, State};
///
/// const ON: State = State::from_static("on");
/// const OFF: State = State::from_static("off");
///
/// struct LightSwitch {
///     status: String,
/// }
///
/// impl Resource for LightSwitch {
///     fn current_state(&self) -> State {
///         match self.status.as_str() {
///             "on" => ON,
///             "off" => OFF,
///             _ => State::UNKNOWN,
///         }
///     }
/// }
///
/// let switch = LightSwitch { status: "dimmed".into() };
/// assert!(switch.current_state().is_unknown());
/// ```
pub trait Resource {
    fn current_state(&self) -> State;
}

impl<R: Resource + ?Sized> Resource for &R {
    fn current_state(&self) -> State {
        (**self).current_state()
    }
}

impl<R: Resource + ?Sized> Resource for &mut R {
    fn current_state(&self) -> State {
        (**self).current_state()
    }
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn current_state(&self) -> State {
        (**self).current_state()
    }
}

impl<R: Resource + ?Sized> Resource for Arc<R> {
    fn current_state(&self) -> State {
        (**self).current_state()
    }
}
