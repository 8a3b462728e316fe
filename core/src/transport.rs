//! Server transport — the wire-protocol boundary.
//!
//! Every game route is a POST with a JSON body coming back. Optional
//! parameters travel in the query string: percent-encoded key=value
//! pairs joined with ';', trailing delimiter trimmed.

use crate::error::ControlResult;
use crate::snapshot::GameSnapshot;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use std::future::Future;

/// One query-string parameter, already rendered to text.
pub type Param = (&'static str, String);

/// What the core needs from the game server. Implemented by
/// HttpTransport in production and by in-memory fakes in tests.
pub trait GameTransport {
    /// POST `getState` and decode the full snapshot.
    fn fetch_state(&self) -> impl Future<Output = ControlResult<GameSnapshot>> + Send;

    /// POST `isAuthorized`.
    fn is_authorized(&self) -> impl Future<Output = ControlResult<bool>> + Send;

    /// POST `authorize` with the given password. Ok(true) on acceptance.
    fn authorize(&self, password: &str) -> impl Future<Output = ControlResult<bool>> + Send;

    /// POST a fire-and-forget action route. The response body is ignored.
    fn dispatch(
        &self,
        route: &'static str,
        params: &[Param],
    ) -> impl Future<Output = ControlResult<()>> + Send;
}

#[derive(Debug, Deserialize)]
struct AuthorizedReply {
    authorized: bool,
}

#[derive(Debug, Deserialize)]
struct AuthorizeOutcome {
    success: bool,
}

/// Render a route URL under `base_url` with the query-string convention
/// described in the module docs. No '?' is appended for empty params.
pub fn build_route_url(base_url: &str, route: &str, params: &[Param]) -> String {
    let mut url = format!("{}/{route}", base_url.trim_end_matches('/'));
    if params.is_empty() {
        return url;
    }

    url.push('?');
    for (key, value) in params {
        url.push_str(&utf8_percent_encode(key, NON_ALPHANUMERIC).to_string());
        url.push('=');
        url.push_str(&utf8_percent_encode(value, NON_ALPHANUMERIC).to_string());
        url.push(';');
    }
    url.pop(); // trailing delimiter
    url
}

/// reqwest-backed transport. Cheap to clone; all clones share one cookie
/// jar, so the session cookie issued by `authorize` rides every later
/// request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client:   reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> ControlResult<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<T>(&self, route: &str, params: &[Param]) -> ControlResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = build_route_url(&self.base_url, route, params);
        let body = self.client.post(url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl GameTransport for HttpTransport {
    async fn fetch_state(&self) -> ControlResult<GameSnapshot> {
        self.post_json("getState", &[]).await
    }

    async fn is_authorized(&self) -> ControlResult<bool> {
        let reply: AuthorizedReply = self.post_json("isAuthorized", &[]).await?;
        Ok(reply.authorized)
    }

    async fn authorize(&self, password: &str) -> ControlResult<bool> {
        let outcome: AuthorizeOutcome = self
            .post_json("authorize", &[("password", password.to_string())])
            .await?;
        Ok(outcome.success)
    }

    async fn dispatch(&self, route: &'static str, params: &[Param]) -> ControlResult<()> {
        let url = build_route_url(&self.base_url, route, params);
        self.client.post(url).send().await?;
        Ok(())
    }
}
