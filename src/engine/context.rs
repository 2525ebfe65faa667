//! Execution context forwarded to event actions.

use crate::core::EventError;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Cancellation-aware context passed through dispatch to an event's action.
///
/// The engine forwards the context verbatim and never inspects it. Actions
/// that want to honour cancellation or a deadline check it themselves,
/// usually via [`DispatchContext::check`].
///
/// # Example
///
/// ```rust
/// use fsm_engine::DispatchContext;
/// use std::time::Duration;
///
/// let ctx = DispatchContext::new().with_timeout(Duration::from_secs(5));
/// assert!(ctx.check().is_ok());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// assert!(ctx.check().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DispatchContext {
    token: CancellationToken,
    deadline: Option<Instant>,
    trace_id: Uuid,
}

impl DispatchContext {
    /// Fresh context: new cancellation token, new trace id, no deadline.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
            trace_id: Uuid::new_v4(),
        }
    }

    /// Use an existing cancellation token, e.g. one owned by a server's
    /// shutdown handler.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline `timeout` from now. A timeout too large to
    /// represent as an `Instant` leaves the context without a deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn with_trace_id(mut self, trace_id: Uuid) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Derive a context that is cancelled with this one but can also be
    /// cancelled on its own. Deadline and trace id are inherited.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
            trace_id: self.trace_id,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Time left before the deadline, `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// Fail fast if the context is cancelled or past its deadline.
    pub fn check(&self) -> Result<(), EventError> {
        if self.is_cancelled() {
            return Err(EventError::cancelled());
        }
        if self.is_expired() {
            return Err(EventError::deadline_exceeded());
        }
        Ok(())
    }
}

impl Default for DispatchContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_is_live() {
        let ctx = DispatchContext::new();

        assert!(!ctx.is_cancelled());
        assert!(!ctx.is_expired());
        assert_eq!(ctx.deadline(), None);
        assert_eq!(ctx.remaining(), None);
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn each_context_gets_its_own_trace_id() {
        assert_ne!(DispatchContext::new().trace_id(), DispatchContext::new().trace_id());

        let id = Uuid::new_v4();
        assert_eq!(DispatchContext::new().with_trace_id(id).trace_id(), id);
    }

    #[test]
    fn cancel_reaches_children_but_not_parents() {
        let parent = DispatchContext::new();
        let child = parent.child();
        let sibling = parent.child();

        assert_eq!(child.trace_id(), parent.trace_id());

        sibling.cancel();
        assert!(sibling.is_cancelled());
        assert!(!parent.is_cancelled());
        assert!(!child.is_cancelled());

        parent.cancel();
        assert!(child.is_cancelled());
        assert_eq!(child.check(), Err(EventError::cancelled()));
    }

    #[test]
    fn past_deadline_is_expired() {
        let ctx = DispatchContext::new().with_deadline(Instant::now());

        assert!(ctx.is_expired());
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
        assert_eq!(ctx.check(), Err(EventError::deadline_exceeded()));
    }

    #[test]
    fn future_deadline_leaves_time() {
        let ctx = DispatchContext::new().with_timeout(Duration::from_secs(60));

        assert!(!ctx.is_expired());
        assert!(ctx.remaining().unwrap() > Duration::from_secs(30));
    }

    #[test]
    fn unrepresentable_timeout_means_no_deadline() {
        let ctx = DispatchContext::new().with_timeout(Duration::MAX);

        assert_eq!(ctx.deadline(), None);
        assert!(!ctx.is_expired());
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn shared_token_cancels_context() {
        let token = CancellationToken::new();
        let ctx = DispatchContext::new().with_token(token.clone());

        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let ctx = DispatchContext::new();
        let waiter = ctx.clone();

        let handle = tokio::spawn(async move { waiter.cancelled().await });
        ctx.cancel();

        handle.await.unwrap();
        assert!(ctx.is_cancelled());
    }
}
