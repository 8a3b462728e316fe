//! Startup authorization gate.
//!
//! Runs exactly once per session: query the server, then prompt-and-submit
//! if it says no. State display never waits on this — enforcement of the
//! mutating routes lives server-side, the gate only drives the prompt flow.

use crate::error::ControlResult;
use crate::transport::GameTransport;

/// Where the gate gets a credential and leaves its one-line messages.
/// The interactive chrome lives outside the core.
pub trait OperatorPrompt {
    /// Ask the operator for the control password. None if they decline.
    fn request_password(&mut self) -> Option<String>;

    /// Surface a one-line message to the operator.
    fn notify(&mut self, message: &str);

    /// Ask the operator to confirm a destructive action.
    fn confirm(&mut self, question: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    Authorized,
    Unauthorized,
}

#[derive(Debug, Default)]
pub struct AuthGate {
    state: AuthState,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// One-shot startup flow. Once the state has left Unknown, later
    /// calls return it without touching the server or the prompt.
    pub async fn resolve<T, P>(&mut self, transport: &T, prompt: &mut P) -> ControlResult<AuthState>
    where
        T: GameTransport,
        P: OperatorPrompt,
    {
        if self.state != AuthState::Unknown {
            return Ok(self.state);
        }

        if transport.is_authorized().await? {
            self.state = AuthState::Authorized;
            return Ok(self.state);
        }

        self.state = match prompt.request_password() {
            Some(password) => {
                if transport.authorize(&password).await? {
                    AuthState::Authorized
                } else {
                    prompt.notify("Incorrect password");
                    AuthState::Unauthorized
                }
            }
            None => AuthState::Unauthorized,
        };

        Ok(self.state)
    }
}
