//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Settings for an [`Engine`](super::Engine).
///
/// Plain data so embedding applications can load it from their own config
/// files. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name attached to every log event emitted by the engine.
    pub name: String,

    /// Record the state seen by the most recent dispatch.
    pub track_last_observed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "fsm".to_string(),
            track_last_observed: true,
        }
    }
}
