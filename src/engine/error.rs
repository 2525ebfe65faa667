//! Dispatch error types.

use crate::core::{EventError, EventName, State};
use thiserror::Error;

/// Errors that can occur when dispatching an event.
///
/// The first three variants are configuration or programming mistakes;
/// the last is the business logic rejecting the transition. Use
/// [`DispatchError::category`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The resource reported the unknown-state sentinel.
    #[error("unknown fsm state: resource reported no valid state")]
    UnknownState,

    /// The resource reported a state with no table entry at all.
    #[error("unregistered state '{state}': no entry in the transition table")]
    UnregisteredState { state: State },

    /// The state is registered but does not permit the event.
    #[error("transition not allowed for event '{event}' from state '{state}'")]
    TransitionNotAllowed { event: EventName, state: State },

    /// The event matched and ran, but its action failed.
    #[error("event '{event}' failed in state '{state}': {source}")]
    EventExecutionFailed {
        event: EventName,
        state: State,
        source: EventError,
    },
}

/// Coarse classification of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Table or resource is misconfigured, or the caller asked for an
    /// illegal transition.
    Configuration,

    /// The event's action refused the transition.
    Rejected,
}

impl DispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownState | Self::UnregisteredState { .. } | Self::TransitionNotAllowed { .. } => {
                ErrorCategory::Configuration
            }
            Self::EventExecutionFailed { .. } => ErrorCategory::Rejected,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_rejected(&self) -> bool {
        self.category() == ErrorCategory::Rejected
    }

    /// The state resolved during dispatch, if one was resolved.
    pub fn state(&self) -> Option<&State> {
        match self {
            Self::UnknownState => None,
            Self::UnregisteredState { state }
            | Self::TransitionNotAllowed { state, .. }
            | Self::EventExecutionFailed { state, .. } => Some(state),
        }
    }

    /// The offending event, for errors raised after the table lookup.
    pub fn event(&self) -> Option<&EventName> {
        match self {
            Self::TransitionNotAllowed { event, .. } | Self::EventExecutionFailed { event, .. } => {
                Some(event)
            }
            _ => None,
        }
    }

    /// The action's failure message, for execution failures.
    pub fn execution_message(&self) -> Option<&str> {
        match self {
            Self::EventExecutionFailed { source, .. } => Some(source.message()),
            _ => None,
        }
    }
}
