use reqwest::Client;
use tokio::time::Instant;
use tracing::error;

use crate::stats::Outcome;

/// Fixed JSON body sent with every request: `{"n": 30000}`.
const WORK_FACTOR: u64 = 30_000;

/// Issues one POST against the target and records the attempt.
///
/// Latency spans from just before the request is sent until the full
/// response body has been read. Every failure is caught and returned as an
/// error [`Outcome`] with zero latency; nothing propagates to the worker
/// loop.
pub async fn issue(client: &Client, url: &str, worker_id: usize) -> Outcome {
    let start = Instant::now();
    match send_once(client, url).await {
        Ok(status) => Outcome::http(status, start.elapsed(), worker_id),
        Err(err) => {
            error!("Error making request: {}", err);
            Outcome::error(err.to_string(), worker_id)
        }
    }
}

async fn send_once(client: &Client, url: &str) -> Result<u16, reqwest::Error> {
    let response = client
        .post(url)
        .json(&serde_json::json!({ "n": WORK_FACTOR }))
        .send()
        .await?;
    let status = response.status().as_u16();
    // Latency must include body transfer, so drain before returning.
    response.bytes().await?;
    Ok(status)
}
