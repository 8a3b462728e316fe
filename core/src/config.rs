use crate::error::ControlResult;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Cadence of authoritative state fetches.
pub const DEFAULT_STATE_POLL_MS: u64 = 300;
/// Cadence of local countdown re-renders. Always faster than the poll.
pub const DEFAULT_RENDER_REFRESH_MS: u64 = 100;

/// Client configuration — server endpoint and refresh cadences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Base URL of the game server. A trailing slash is tolerated.
    pub server_url: String,
    pub state_poll_ms: u64,
    pub render_refresh_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            state_poll_ms: DEFAULT_STATE_POLL_MS,
            render_refresh_ms: DEFAULT_RENDER_REFRESH_MS,
        }
    }
}

impl ControlsConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> ControlResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn state_poll_interval(&self) -> Duration {
        Duration::from_millis(self.state_poll_ms)
    }

    pub fn render_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.render_refresh_ms)
    }
}
