//! Authorization gate tests — the prompt flow fires exactly once per
//! session, and a rejection surfaces exactly one message.

use anyhow::anyhow;
use std::sync::{Arc, Mutex};
use wordround_core::auth::{AuthGate, AuthState, OperatorPrompt};
use wordround_core::error::{ControlError, ControlResult};
use wordround_core::snapshot::GameSnapshot;
use wordround_core::transport::{GameTransport, Param};

/// Fake server: a fixed isAuthorized answer and one accepted password.
#[derive(Clone)]
struct AuthTransport {
    authorized: bool,
    accepts: Option<&'static str>,
    is_authorized_calls: Arc<Mutex<u32>>,
    submitted: Arc<Mutex<Vec<String>>>,
}

impl AuthTransport {
    fn new(authorized: bool, accepts: Option<&'static str>) -> Self {
        Self {
            authorized,
            accepts,
            is_authorized_calls: Arc::new(Mutex::new(0)),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn is_authorized_calls(&self) -> u32 {
        *self.is_authorized_calls.lock().expect("calls lock")
    }

    fn submitted(&self) -> Vec<String> {
        self.submitted.lock().expect("submitted lock").clone()
    }
}

impl GameTransport for AuthTransport {
    async fn fetch_state(&self) -> ControlResult<GameSnapshot> {
        Err(ControlError::Other(anyhow!("not used by the gate")))
    }

    async fn is_authorized(&self) -> ControlResult<bool> {
        *self.is_authorized_calls.lock().expect("calls lock") += 1;
        Ok(self.authorized)
    }

    async fn authorize(&self, password: &str) -> ControlResult<bool> {
        self.submitted
            .lock()
            .expect("submitted lock")
            .push(password.to_string());
        Ok(self.accepts == Some(password))
    }

    async fn dispatch(&self, _route: &'static str, _params: &[Param]) -> ControlResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct ScriptPrompt {
    password: Option<String>,
    password_requests: u32,
    notes: Vec<String>,
}

impl OperatorPrompt for ScriptPrompt {
    fn request_password(&mut self) -> Option<String> {
        self.password_requests += 1;
        self.password.clone()
    }

    fn notify(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }

    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

#[tokio::test]
async fn authorized_session_never_prompts() {
    let transport = AuthTransport::new(true, None);
    let mut prompt = ScriptPrompt::default();
    let mut gate = AuthGate::new();

    let state = gate.resolve(&transport, &mut prompt).await.expect("resolve");

    assert_eq!(state, AuthState::Authorized);
    assert_eq!(prompt.password_requests, 0, "prompt fired for an authorized session");
    assert!(transport.submitted().is_empty());
}

#[tokio::test]
async fn unauthorized_session_prompts_and_submits_once() {
    let transport = AuthTransport::new(false, Some("letmein"));
    let mut prompt = ScriptPrompt {
        password: Some("letmein".to_string()),
        ..ScriptPrompt::default()
    };
    let mut gate = AuthGate::new();

    let state = gate.resolve(&transport, &mut prompt).await.expect("resolve");

    assert_eq!(state, AuthState::Authorized);
    assert_eq!(prompt.password_requests, 1);
    assert_eq!(transport.submitted(), vec!["letmein"]);
    assert!(prompt.notes.is_empty(), "acceptance must not leave a message");
}

#[tokio::test]
async fn rejection_surfaces_one_message_and_stops() {
    let transport = AuthTransport::new(false, Some("right"));
    let mut prompt = ScriptPrompt {
        password: Some("wrong".to_string()),
        ..ScriptPrompt::default()
    };
    let mut gate = AuthGate::new();

    let state = gate.resolve(&transport, &mut prompt).await.expect("resolve");

    assert_eq!(state, AuthState::Unauthorized);
    assert_eq!(prompt.notes, vec!["Incorrect password"]);
    assert_eq!(
        transport.submitted().len(),
        1,
        "a rejection must not trigger an automatic retry"
    );
}

#[tokio::test]
async fn gate_is_one_shot_per_session() {
    let transport = AuthTransport::new(false, None);
    let mut prompt = ScriptPrompt::default();
    let mut gate = AuthGate::new();

    // Simulate the check being reachable from many later ticks.
    for _ in 0..5 {
        gate.resolve(&transport, &mut prompt).await.expect("resolve");
    }

    assert_eq!(
        transport.is_authorized_calls(),
        1,
        "the server must be asked once per session, not per tick"
    );
    assert_eq!(prompt.password_requests, 1, "the prompt must fire once per session");
}

#[tokio::test]
async fn declined_prompt_submits_nothing() {
    let transport = AuthTransport::new(false, Some("letmein"));
    let mut prompt = ScriptPrompt::default(); // password: None
    let mut gate = AuthGate::new();

    let state = gate.resolve(&transport, &mut prompt).await.expect("resolve");

    assert_eq!(state, AuthState::Unauthorized);
    assert!(transport.submitted().is_empty(), "no credential, no submission");
    assert!(prompt.notes.is_empty());
}
