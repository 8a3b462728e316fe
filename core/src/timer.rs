//! Countdown arithmetic — reconciles server timestamps with the local clock.
//!
//! One formula covers running and paused rounds: while paused, "now" is
//! frozen at the pause instant instead of the live clock. The server owns
//! the resume contract (it shifts startTime forward by the paused span),
//! so no paused-duration accumulator exists on this side.

use crate::snapshot::GameSnapshot;
use crate::types::EpochSeconds;

/// Timer text for a snapshot at the given local time.
///
/// Empty before the round starts; otherwise whole seconds remaining,
/// clamped at "0" once the round has run out.
pub fn countdown_text(snapshot: &GameSnapshot, local_now: EpochSeconds) -> String {
    if !snapshot.started {
        return String::new();
    }

    let now = if snapshot.paused {
        snapshot.paused_at
    } else {
        local_now
    };
    let elapsed = now - snapshot.start_time;
    let remaining = snapshot.round_duration - elapsed;

    if remaining < 0.0 {
        "0".to_string()
    } else {
        format!("{}", remaining.floor() as u64)
    }
}
