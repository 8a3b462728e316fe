//! State polling — the fixed-cadence task that keeps the cell fresh.

use crate::snapshot::StateCell;
use crate::transport::GameTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

/// Fetch the authoritative state once and adopt the result wholesale.
///
/// A failed or malformed response is a silent skip — the stale snapshot
/// stays up until the next successful poll. No retry, no backoff.
pub async fn poll_once<T: GameTransport>(transport: &T, cell: &StateCell) {
    match transport.fetch_state().await {
        Ok(snapshot) => cell.replace(snapshot),
        Err(err) => log::debug!("state poll skipped: {err}"),
    }
}

/// Run the poll loop for the life of the runtime.
///
/// Each tick spawns its fetch, so a response slower than the cadence
/// never delays the next tick. Overlapping fetches are allowed; the last
/// response to resolve wins the cell.
pub async fn run_poller<T>(transport: T, cell: Arc<StateCell>, cadence: Duration)
where
    T: GameTransport + Clone + Send + Sync + 'static,
{
    let mut ticks = time::interval(cadence);
    loop {
        ticks.tick().await;
        let transport = transport.clone();
        let cell = Arc::clone(&cell);
        tokio::spawn(async move {
            poll_once(&transport, &cell).await;
        });
    }
}
