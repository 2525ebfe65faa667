//! Engine that validates events against a transition table and runs them.

use crate::core::{AsyncEvent, Event, EventError, EventName, Resource, State};
use crate::engine::config::EngineConfig;
use crate::engine::context::DispatchContext;
use crate::engine::error::DispatchError;
use crate::table::TransitionTable;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The state seen by a dispatch, kept for diagnostics only.
///
/// This is never consulted by later dispatches; every call re-reads the
/// resource.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub state: State,
    pub observed_at: DateTime<Utc>,
}

/// Validates and dispatches events against resources.
///
/// The engine holds no business state, so one instance can serve any
/// number of resources and threads. Its only mutable field is the
/// diagnostic [`Observation`], guarded by a lock held just long enough to
/// write it. That lock does not serialize transitions on a resource:
/// `dispatch` takes the resource by `&mut`, so exclusive access to one
/// resource is the caller's to arrange.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{
///     DispatchContext, DispatchError, Engine, Event, EventError, EventName, Resource, State,
///     TransitionTable,
/// };
///
/// const ON: State = State::from_static("on");
/// const OFF: State = State::from_static("off");
///
/// struct LightSwitch {
///     on: bool,
/// }
///
/// impl Resource for LightSwitch {
///     fn current_state(&self) -> State {
///         if self.on { ON } else { OFF }
///     }
/// }
///
/// struct TurnOn;
///
/// impl Event<LightSwitch> for TurnOn {
///     fn name(&self) -> EventName {
///         EventName::from_static("TurnOn")
///     }
///
///     fn on_event(&self, _ctx: &DispatchContext, switch: &mut LightSwitch) -> Result<(), EventError> {
///         switch.on = true;
///         Ok(())
///     }
/// }
///
/// let table = TransitionTable::new()
///     .with_state(ON, [EventName::from("TurnOff")])
///     .with_state(OFF, [EventName::from("TurnOn")]);
/// let engine = Engine::new(table);
/// let ctx = DispatchContext::new();
///
/// let mut switch = LightSwitch { on: false };
/// engine.dispatch(&ctx, &TurnOn, &mut switch).unwrap();
/// assert!(switch.on);
///
/// let err = engine.dispatch(&ctx, &TurnOn, &mut switch).unwrap_err();
/// assert!(matches!(err, DispatchError::TransitionNotAllowed { .. }));
/// ```
#[derive(Debug)]
pub struct Engine {
    table: Arc<TransitionTable>,
    config: EngineConfig,
    last_observed: Mutex<Option<Observation>>,
}

impl Engine {
    /// Create an engine with the default configuration.
    ///
    /// Pass an `Arc<TransitionTable>` to share one table across engines.
    pub fn new(table: impl Into<Arc<TransitionTable>>) -> Self {
        Self::with_config(table, EngineConfig::default())
    }

    pub fn with_config(table: impl Into<Arc<TransitionTable>>, config: EngineConfig) -> Self {
        Self {
            table: table.into(),
            config,
            last_observed: Mutex::new(None),
        }
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The state seen by the most recent dispatch that got past the
    /// unknown-state check. Diagnostic only; never ground truth.
    pub fn last_observed(&self) -> Option<Observation> {
        self.last_observed.lock().clone()
    }

    /// Validate `event` against the resource's current state and, if it is
    /// permitted, run its action exactly once.
    ///
    /// `ctx` is forwarded verbatim to the action.
    pub fn dispatch<R, E>(
        &self,
        ctx: &DispatchContext,
        event: &E,
        resource: &mut R,
    ) -> Result<(), DispatchError>
    where
        R: Resource + ?Sized,
        E: Event<R> + ?Sized,
    {
        let name = event.name();
        let state = self.authorize(ctx, &name, &*resource)?;

        event
            .on_event(ctx, resource)
            .map_err(|source| self.rejected(ctx, name.clone(), state.clone(), source))?;

        debug!(
            engine = %self.config.name,
            trace_id = %ctx.trace_id(),
            state = %state,
            event = %name,
            "event dispatched"
        );
        Ok(())
    }

    /// Same as [`Engine::dispatch`], awaiting an asynchronous action.
    ///
    /// The engine itself never suspends; any await time comes from the
    /// action.
    pub async fn dispatch_async<R, E>(
        &self,
        ctx: &DispatchContext,
        event: &E,
        resource: &mut R,
    ) -> Result<(), DispatchError>
    where
        R: Resource + Send + ?Sized,
        E: AsyncEvent<R> + ?Sized,
    {
        let name = event.name();
        let state = self.authorize(ctx, &name, &*resource)?;

        if let Err(source) = event.on_event(ctx, resource).await {
            return Err(self.rejected(ctx, name, state, source));
        }

        debug!(
            engine = %self.config.name,
            trace_id = %ctx.trace_id(),
            state = %state,
            event = %name,
            "event dispatched"
        );
        Ok(())
    }

    /// Events permitted for the resource's current state, in table order.
    ///
    /// Fails like dispatch does for unknown or unregistered states. Does
    /// not touch the diagnostic observation.
    pub fn permitted_events<R>(&self, resource: &R) -> Result<&[EventName], DispatchError>
    where
        R: Resource + ?Sized,
    {
        let state = resource.current_state();
        if state.is_unknown() {
            return Err(DispatchError::UnknownState);
        }
        self.table
            .events_for(&state)
            .ok_or(DispatchError::UnregisteredState { state })
    }

    /// Check whether an event with this name would be accepted right now.
    pub fn can_dispatch<R>(&self, event: &EventName, resource: &R) -> bool
    where
        R: Resource + ?Sized,
    {
        self.permitted_events(resource)
            .is_ok_and(|events| events.contains(event))
    }

    /// Resolve the resource's state and check the event against the table.
    fn authorize<R>(
        &self,
        ctx: &DispatchContext,
        event: &EventName,
        resource: &R,
    ) -> Result<State, DispatchError>
    where
        R: Resource + ?Sized,
    {
        let state = resource.current_state();
        if state.is_unknown() {
            warn!(
                engine = %self.config.name,
                trace_id = %ctx.trace_id(),
                event = %event,
                "resource reported an unknown state"
            );
            return Err(DispatchError::UnknownState);
        }

        self.record(&state);

        let Some(permitted) = self.table.events_for(&state) else {
            warn!(
                engine = %self.config.name,
                trace_id = %ctx.trace_id(),
                state = %state,
                event = %event,
                "state is not registered in the transition table"
            );
            return Err(DispatchError::UnregisteredState { state });
        };

        // First match wins; duplicates are the table author's concern.
        if !permitted.iter().any(|candidate| candidate == event) {
            warn!(
                engine = %self.config.name,
                trace_id = %ctx.trace_id(),
                state = %state,
                event = %event,
                permitted = permitted.len(),
                "transition not allowed"
            );
            return Err(DispatchError::TransitionNotAllowed {
                event: event.clone(),
                state,
            });
        }

        debug!(
            engine = %self.config.name,
            trace_id = %ctx.trace_id(),
            state = %state,
            event = %event,
            "transition permitted"
        );
        Ok(state)
    }

    fn rejected(
        &self,
        ctx: &DispatchContext,
        event: EventName,
        state: State,
        source: EventError,
    ) -> DispatchError {
        info!(
            engine = %self.config.name,
            trace_id = %ctx.trace_id(),
            state = %state,
            event = %event,
            error = %source,
            "event action failed"
        );
        DispatchError::EventExecutionFailed {
            event,
            state,
            source,
        }
    }

    fn record(&self, state: &State) {
        if !self.config.track_last_observed {
            return;
        }
        *self.last_observed.lock() = Some(Observation {
            state: state.clone(),
            observed_at: Utc::now(),
        });
    }
}
