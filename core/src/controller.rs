//! The controller session — the heart of the controls client.
//!
//! Two periodic tasks share one snapshot cell:
//!   poller   → cell   (replace wholesale, every state_poll interval)
//!   renderer ← cell   (read-only, every render_refresh interval)
//!
//! RULES:
//!   - The tasks never talk to each other; the cell is the only coupling.
//!   - The renderer's tick never suspends.
//!   - The authorization gate runs once at startup and blocks neither task.

use crate::auth::{AuthGate, AuthState, OperatorPrompt};
use crate::clock::Clock;
use crate::command::{dispatch_action, ControlAction};
use crate::config::ControlsConfig;
use crate::error::ControlResult;
use crate::poll::run_poller;
use crate::render::{Renderer, RenderSink};
use crate::snapshot::StateCell;
use crate::transport::GameTransport;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time;

pub struct Controller<T> {
    transport: T,
    config:    ControlsConfig,
    cell:      Arc<StateCell>,
    gate:      AuthGate,
}

impl<T> Controller<T>
where
    T: GameTransport + Clone + Send + Sync + 'static,
{
    pub fn new(transport: T, config: ControlsConfig) -> Self {
        Self {
            transport,
            config,
            cell: Arc::new(StateCell::new()),
            gate: AuthGate::new(),
        }
    }

    /// Shared handle to the snapshot cell.
    pub fn cell(&self) -> Arc<StateCell> {
        Arc::clone(&self.cell)
    }

    pub fn auth_state(&self) -> AuthState {
        self.gate.state()
    }

    /// Spawn the poll and render tasks. They run for the life of the
    /// runtime; the returned handles are only useful for aborting.
    pub fn spawn_refresh_tasks<C, S>(&self, clock: C, sink: S) -> (JoinHandle<()>, JoinHandle<()>)
    where
        C: Clock + Send + 'static,
        S: RenderSink + Send + 'static,
    {
        let poll_task = tokio::spawn(run_poller(
            self.transport.clone(),
            self.cell(),
            self.config.state_poll_interval(),
        ));

        let mut renderer = Renderer::new(self.cell(), clock, sink);
        let cadence = self.config.render_refresh_interval();
        let render_task = tokio::spawn(async move {
            let mut ticks = time::interval(cadence);
            loop {
                ticks.tick().await;
                renderer.tick();
            }
        });

        (poll_task, render_task)
    }

    /// Run the startup authorization flow. One-shot — see AuthGate.
    pub async fn resolve_authorization<P>(&mut self, prompt: &mut P) -> ControlResult<AuthState>
    where
        P: OperatorPrompt,
    {
        self.gate.resolve(&self.transport, prompt).await
    }

    /// Dispatch an operator action, fire-and-forget.
    pub async fn dispatch<P>(&self, prompt: &mut P, action: ControlAction)
    where
        P: OperatorPrompt,
    {
        dispatch_action(&self.transport, prompt, action).await;
    }
}
