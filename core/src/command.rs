use crate::auth::OperatorPrompt;
use crate::transport::{GameTransport, Param};
use crate::types::Points;

/// All operator-issued control actions, each mapping to one server route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    // ── Word flow ─────────────────────────────────
    NextWord,
    SkipWord,
    NukeUsedWords,

    // ── Round control ─────────────────────────────
    Reset,
    Start,
    Pause,
    Resume,

    // ── Adjustments ───────────────────────────────
    ModifyPoints { points: Points },
    ModifyTimer { seconds: i64 },
}

impl ControlAction {
    /// Server route this action is dispatched to.
    pub fn route(&self) -> &'static str {
        match self {
            Self::NextWord => "nextWord",
            Self::SkipWord => "skipWord",
            Self::NukeUsedWords => "nukeUsedWords",
            Self::Reset => "reset",
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::ModifyPoints { .. } => "modifyPoints",
            Self::ModifyTimer { .. } => "modifyTimer",
        }
    }

    /// Query parameters carried by this action.
    pub fn params(&self) -> Vec<Param> {
        match self {
            Self::ModifyPoints { points } => vec![("points", points.to_string())],
            Self::ModifyTimer { seconds } => vec![("seconds", seconds.to_string())],
            _ => Vec::new(),
        }
    }

    /// Destructive actions need an explicit operator confirmation first.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::NukeUsedWords => {
                Some("Are you sure? This will make all the configured words available again!")
            }
            Self::Reset => Some("Are you sure? This will reset the game state!"),
            _ => None,
        }
    }
}

/// Fire-and-forget dispatch.
///
/// Destructive actions ask for confirmation first; declining drops the
/// action. A failed dispatch is logged, never surfaced, never retried.
pub async fn dispatch_action<T, P>(transport: &T, prompt: &mut P, action: ControlAction)
where
    T: GameTransport,
    P: OperatorPrompt,
{
    if let Some(question) = action.confirmation() {
        if !prompt.confirm(question) {
            return;
        }
    }

    if let Err(err) = transport.dispatch(action.route(), &action.params()).await {
        log::warn!("{} dropped: {err}", action.route());
    }
}
