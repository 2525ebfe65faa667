//! Opt-in lint for transition tables.
//!
//! Construction never rejects a table. `audit` reports every finding at
//! once using Stillwater's `Validation`, so a table author can fix all
//! problems in a single pass.

use super::TransitionTable;
use crate::core::{EventName, State};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A likely authoring mistake found in a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    /// The unknown sentinel can never be looked up, so its entry is dead.
    #[error("the unknown state sentinel is registered as a table key")]
    UnknownStateKey,

    /// Only the first occurrence can ever match.
    #[error("event '{event}' is registered more than once for state '{state}'")]
    DuplicateEvent { state: State, event: EventName },

    #[error("state '{state}' lists an event with an empty name")]
    EmptyEventName { state: State },
}

impl TransitionTable {
    /// Lint the table, accumulating ALL issues.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_engine::{EventName, State, TransitionTable};
    ///
    /// let table = TransitionTable::new()
    ///     .with_state(State::from("on"), [EventName::from("TurnOff")])
    ///     .with_state(State::from("off"), [EventName::from("TurnOn")]);
    ///
    /// assert!(table.audit().is_success());
    /// ```
    pub fn audit(&self) -> Validation<(), NonEmptyVec<TableIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

        for (state, events) in self.iter() {
            if state.is_unknown() {
                checks.push(Validation::fail(TableIssue::UnknownStateKey));
            }

            let mut seen = HashSet::new();
            for event in events {
                let check = if event.is_empty() {
                    Validation::fail(TableIssue::EmptyEventName {
                        state: state.clone(),
                    })
                } else if !seen.insert(event) {
                    Validation::fail(TableIssue::DuplicateEvent {
                        state: state.clone(),
                        event: event.clone(),
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
