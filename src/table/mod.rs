//! Transition table: which events may fire while a resource is in a state.
//!
//! A table is built once, handed to an [`Engine`](crate::Engine), and never
//! mutated afterwards. It is plain data, so one table may be shared (via
//! `Arc`) across any number of engines and threads.
//!
//! A state that is present with an empty event list is a legal terminal
//! state. A state that is absent is unregistered, which dispatch reports
//! as a configuration error.

mod audit;

pub use audit::TableIssue;

use crate::core::{EventName, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from [`State`] to the ordered list of permitted [`EventName`]s.
///
/// No validation happens at construction. Use [`TransitionTable::audit`]
/// to lint a table for likely authoring mistakes.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{EventName, State, TransitionTable};
///
/// const ON: State = State::from_static("on");
/// const OFF: State = State::from_static("off");
/// const TURN_ON: EventName = EventName::from_static("TurnOn");
/// const TURN_OFF: EventName = EventName::from_static("TurnOff");
///
/// let table = TransitionTable::new()
///     .with_state(ON, [TURN_OFF])
///     .with_state(OFF, [TURN_ON]);
///
/// assert!(table.permits(&ON, &TURN_OFF));
/// assert!(!table.permits(&ON, &TURN_ON));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    states: HashMap<State, Vec<EventName>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register the permitted events for a state.
    ///
    /// Registering the same state twice replaces the earlier entry.
    pub fn with_state<I>(mut self, state: State, events: I) -> Self
    where
        I: IntoIterator<Item = EventName>,
    {
        self.states.insert(state, events.into_iter().collect());
        self
    }

    /// Permitted events for `state`, in table order.
    ///
    /// Returns `None` when the state has no entry at all, and an empty
    /// slice for a registered terminal state.
    pub fn events_for(&self, state: &State) -> Option<&[EventName]> {
        self.states.get(state).map(Vec::as_slice)
    }

    pub fn contains_state(&self, state: &State) -> bool {
        self.states.contains_key(state)
    }

    /// Check whether `event` is permitted while in `state`.
    pub fn permits(&self, state: &State, event: &EventName) -> bool {
        self.events_for(state)
            .is_some_and(|events| events.iter().any(|e| e == event))
    }

    /// Registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.keys()
    }

    /// Iterate over every entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &[EventName])> {
        self.states.iter().map(|(s, e)| (s, e.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl From<HashMap<State, Vec<EventName>>> for TransitionTable {
    fn from(states: HashMap<State, Vec<EventName>>) -> Self {
        Self { states }
    }
}

impl FromIterator<(State, Vec<EventName>)> for TransitionTable {
    fn from_iter<T: IntoIterator<Item = (State, Vec<EventName>)>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
