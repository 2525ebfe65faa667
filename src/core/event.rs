//! Event capability: a named, executable transition trigger.

use super::state::EventName;
use crate::engine::DispatchContext;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by an event's action.
///
/// The message is preserved verbatim through
/// [`DispatchError::EventExecutionFailed`](crate::DispatchError::EventExecutionFailed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EventError {
    message: String,
}

impl EventError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The action observed that its dispatch context was cancelled.
    pub fn cancelled() -> Self {
        Self::new("dispatch cancelled")
    }

    /// The action observed that its dispatch context's deadline passed.
    pub fn deadline_exceeded() -> Self {
        Self::new("dispatch deadline exceeded")
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for EventError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for EventError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// A requested transition trigger with an explicit identity and an action.
///
/// The action receives the business object as a typed argument. The
/// engine never mutates the resource itself; any state change is the
/// action's responsibility, including leaving the resource untouched when
/// it fails.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{DispatchContext, Event, EventError, EventName};
///
/// struct Switch {
///     on: bool,
/// }
///
/// struct TurnOff;
///
/// impl Event<Switch> for TurnOff {
///     fn name(&self) -> EventName {
///         EventName::from_static("TurnOff")
///     }
///
///     fn on_event(&self, _ctx: &DispatchContext, switch: &mut Switch) -> Result<(), EventError> {
///         switch.on = false;
///         Ok(())
///     }
/// }
/// ```
pub trait Event<R: ?Sized> {
    /// Stable identity used for table matching.
    fn name(&self) -> EventName;

    /// Execute the event's side effect.
    fn on_event(&self, ctx: &DispatchContext, resource: &mut R) -> Result<(), EventError>;
}

impl<R: ?Sized, E: Event<R> + ?Sized> Event<R> for &E {
    fn name(&self) -> EventName {
        (**self).name()
    }

    fn on_event(&self, ctx: &DispatchContext, resource: &mut R) -> Result<(), EventError> {
        (**self).on_event(ctx, resource)
    }
}

impl<R: ?Sized, E: Event<R> + ?Sized> Event<R> for Box<E> {
    fn name(&self) -> EventName {
        (**self).name()
    }

    fn on_event(&self, ctx: &DispatchContext, resource: &mut R) -> Result<(), EventError> {
        (**self).on_event(ctx, resource)
    }
}

impl<R: ?Sized, E: Event<R> + ?Sized> Event<R> for Arc<E> {
    fn name(&self) -> EventName {
        (**self).name()
    }

    fn on_event(&self, ctx: &DispatchContext, resource: &mut R) -> Result<(), EventError> {
        (**self).on_event(ctx, resource)
    }
}

/// Asynchronous counterpart of [`Event`], dispatched with
/// [`Engine::dispatch_async`](crate::Engine::dispatch_async).
#[async_trait]
pub trait AsyncEvent<R: ?Sized + Send>: Send + Sync {
    /// Stable identity used for table matching.
    fn name(&self) -> EventName;

    /// Execute the event's side effect.
    async fn on_event(&self, ctx: &DispatchContext, resource: &mut R) -> Result<(), EventError>;
}
