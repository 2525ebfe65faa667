//! Property-based tests for dispatch.
//!
//! These tests use proptest to verify the dispatch outcome rules hold
//! across randomly generated tables, states and events.

use fsm_engine::{
    DispatchContext, DispatchError, Engine, Event, EventError, EventName, Resource, State,
    TransitionTable,
};
use proptest::prelude::*;
use std::cell::Cell;

struct Stub {
    state: State,
}

impl Resource for Stub {
    fn current_state(&self) -> State {
        self.state.clone()
    }
}

struct Probe {
    name: EventName,
    fail_with: Option<String>,
    runs: Cell<usize>,
}

impl Probe {
    fn new(name: EventName, fail_with: Option<String>) -> Self {
        Self {
            name,
            fail_with,
            runs: Cell::new(0),
        }
    }
}

impl Event<Stub> for Probe {
    fn name(&self) -> EventName {
        self.name.clone()
    }

    fn on_event(&self, _ctx: &DispatchContext, _stub: &mut Stub) -> Result<(), EventError> {
        self.runs.set(self.runs.get() + 1);
        match &self.fail_with {
            Some(message) => Err(EventError::new(message.clone())),
            None => Ok(()),
        }
    }
}

prop_compose! {
    fn arbitrary_state()(name in "[a-z]{1,6}") -> State {
        State::new(name)
    }
}

prop_compose! {
    fn arbitrary_event()(name in "[A-Z][a-z]{0,5}") -> EventName {
        EventName::new(name)
    }
}

prop_compose! {
    fn arbitrary_table()(
        entries in prop::collection::vec(
            (arbitrary_state(), prop::collection::vec(arbitrary_event(), 0..4)),
            0..6,
        )
    ) -> TransitionTable {
        entries.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn unknown_state_never_runs_the_action(
        table in arbitrary_table(),
        event in arbitrary_event(),
    ) {
        let engine = Engine::new(table);
        let probe = Probe::new(event, None);
        let mut stub = Stub { state: State::UNKNOWN };

        let result = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);

        prop_assert_eq!(result, Err(DispatchError::UnknownState));
        prop_assert_eq!(probe.runs.get(), 0);
    }

    #[test]
    fn absent_state_is_unregistered(
        table in arbitrary_table(),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        prop_assume!(!table.contains_state(&state));

        let engine = Engine::new(table);
        let probe = Probe::new(event, None);
        let mut stub = Stub { state: state.clone() };

        let result = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);

        prop_assert_eq!(result, Err(DispatchError::UnregisteredState { state }));
        prop_assert_eq!(probe.runs.get(), 0);
    }

    #[test]
    fn empty_state_rejects_every_event(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let engine = Engine::new(TransitionTable::new().with_state(state.clone(), []));
        let probe = Probe::new(event.clone(), None);
        let mut stub = Stub { state: state.clone() };

        let result = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);

        prop_assert_eq!(result, Err(DispatchError::TransitionNotAllowed { event, state }));
        prop_assert_eq!(probe.runs.get(), 0);
    }

    #[test]
    fn outcome_follows_table_membership(
        table in arbitrary_table(),
        event in arbitrary_event(),
        fail_with in prop::option::of("[a-z ]{1,20}"),
    ) {
        let states: Vec<State> = table.states().cloned().collect();
        let engine = Engine::new(table);

        for state in states {
            let permitted = engine.table().permits(&state, &event);
            let probe = Probe::new(event.clone(), fail_with.clone());
            let mut stub = Stub { state: state.clone() };

            let result = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);

            match (permitted, &fail_with) {
                (false, _) => {
                    prop_assert_eq!(
                        result,
                        Err(DispatchError::TransitionNotAllowed {
                            event: event.clone(),
                            state,
                        })
                    );
                    prop_assert_eq!(probe.runs.get(), 0);
                }
                (true, None) => {
                    prop_assert_eq!(result, Ok(()));
                    prop_assert_eq!(probe.runs.get(), 1);
                }
                (true, Some(message)) => {
                    let err = result.unwrap_err();
                    prop_assert_eq!(err.execution_message(), Some(message.as_str()));
                    prop_assert!(err.is_rejected());
                    prop_assert_eq!(probe.runs.get(), 1);
                }
            }
        }
    }

    #[test]
    fn repeated_dispatch_is_idempotent(
        table in arbitrary_table(),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let engine = Engine::new(table);
        let probe = Probe::new(event, None);
        let mut stub = Stub { state };

        let first = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);
        let second = engine.dispatch(&DispatchContext::new(), &probe, &mut stub);

        prop_assert_eq!(first, second);
    }
}
