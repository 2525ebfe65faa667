//! State and event identity tokens.
//!
//! Both tokens are cheap, immutable, string-backed values. They can be
//! declared as `const` items, which is how tables are usually written.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// An opaque, comparable token naming one point in a resource's lifecycle.
///
/// The empty token is reserved as [`State::UNKNOWN`], the sentinel a
/// resource reports when it cannot map its internal status to any real
/// lifecycle stage.
///
/// # Example
///
/// ```rust
/// use fsm_engine::State;
///
/// const ON: State = State::from_static("on");
///
/// assert_eq!(ON.as_str(), "on");
/// assert!(!ON.is_unknown());
/// assert!(State::UNKNOWN.is_unknown());
/// assert_eq!(State::new(String::from("on")), ON);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(Cow<'static, str>);

impl State {
    /// Sentinel meaning "no known state".
    pub const UNKNOWN: State = State(Cow::Borrowed(""));

    /// Create a state from a static string. Usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        State(Cow::Borrowed(name))
    }

    /// Create a state from any owned or borrowed string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        State(name.into())
    }

    /// The state's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the unknown-state sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("State(<unknown>)")
        } else {
            write!(f, "State({:?})", self.as_str())
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("<unknown>")
        } else {
            f.write_str(self.as_str())
        }
    }
}

impl From<&'static str> for State {
    fn from(name: &'static str) -> Self {
        State::from_static(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        State::new(name)
    }
}

/// The declared, stable identity of an event kind.
///
/// Events are matched against a transition table purely by this name,
/// never by their concrete Rust type. Two unrelated types declaring the
/// same name are the same event kind; two types sharing a representation
/// but declaring different names are not.
///
/// # Example
///
/// ```rust
/// use fsm_engine::EventName;
///
/// const TURN_ON: EventName = EventName::from_static("TurnOn");
/// assert_eq!(TURN_ON, EventName::new("TurnOn"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(Cow<'static, str>);

impl EventName {
    /// Create an event name from a static string. Usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        EventName(Cow::Borrowed(name))
    }

    /// Create an event name from any owned or borrowed string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        EventName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventName({:?})", self.as_str())
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for EventName {
    fn from(name: &'static str) -> Self {
        EventName::from_static(name)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        EventName::new(name)
    }
}
