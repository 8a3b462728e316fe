//! wordround-core: client core for a word-guessing party game controller.
//!
//! Polls an authoritative game server for the current word, score, and
//! round timestamps, and renders a locally interpolated countdown on an
//! independent, faster cadence. Operator actions (advance/skip words,
//! round control, score and timer adjustment) dispatch fire-and-forget
//! to named server routes behind a startup authorization gate.

pub mod auth;
pub mod clock;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod poll;
pub mod render;
pub mod snapshot;
pub mod timer;
pub mod transport;
pub mod types;
