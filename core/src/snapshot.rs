//! The shared game snapshot and the cell that owns it.
//!
//! RULE: the poller writes, the renderer reads, nobody merges.
//! A server response is adopted wholesale or not at all — a reader
//! always sees a fully-formed snapshot or none.

use crate::types::{DurationSecs, EpochSeconds, Points};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// The last known complete server-reported game state.
/// Wire names are camelCase; a response missing any field is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub word:    String,
    pub points:  Points,
    pub status:  String,
    pub started: bool,
    pub paused:  bool,
    /// Round start, as reported by the server. The server shifts this
    /// forward on resume; the client never compensates for paused time.
    #[serde(rename = "startTime")]
    pub start_time: EpochSeconds,
    /// The pause instant. Only meaningful while `paused` is true.
    #[serde(rename = "pausedAt")]
    pub paused_at: EpochSeconds,
    #[serde(rename = "roundDuration")]
    pub round_duration: DurationSecs,
}

/// Single-slot store for the latest snapshot. Last write wins.
///
/// get() hands out the snapshot behind an Arc, so a reader keeps a
/// fully-formed value even if a replace() lands concurrently.
#[derive(Debug, Default)]
pub struct StateCell {
    slot: RwLock<Option<Arc<GameSnapshot>>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, or None before the first successful poll.
    pub fn get(&self) -> Option<Arc<GameSnapshot>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Adopt a new snapshot wholesale, superseding the previous one.
    pub fn replace(&self, snapshot: GameSnapshot) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(snapshot));
    }
}
