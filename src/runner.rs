use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::error::AppResult;
use crate::http;
use crate::stats::{Outcome, ResultSet};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub workers: usize,
    pub duration: Duration,
}

/// Drives one load test: spawns the worker pool, collects every outcome,
/// and returns the completed result set once all workers have exited.
///
/// Workers share one client (the connection context) and one deadline.
/// Outcomes flow over an unbounded channel to a collector task that owns
/// the growing result set exclusively, so no shared mutable collection
/// exists. The run ends only when every worker's loop has exited; a stuck
/// in-flight request is allowed to finish and can push completion past the
/// nominal deadline.
///
/// # Errors
///
/// Returns an error when a worker task fails to join (panic or
/// cancellation). That is fatal to the whole run: workers are never
/// restarted and no partial result set is returned.
pub async fn run_load_test(client: Client, config: RunConfig) -> AppResult<ResultSet> {
    let deadline = Instant::now() + config.duration;
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

    let collector = spawn_collector(outcome_rx);

    let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(config.workers);
    for worker_id in 0..config.workers {
        let client = client.clone();
        let url = config.url.clone();
        let outcome_tx = outcome_tx.clone();
        workers.push(tokio::spawn(worker_loop(
            worker_id, client, url, deadline, outcome_tx,
        )));
    }
    // The collector exits when the last sender drops.
    drop(outcome_tx);

    let mut first_failure = None;
    for handle in workers {
        if let Err(err) = handle.await
            && first_failure.is_none()
        {
            first_failure = Some(err);
        }
    }
    if let Some(err) = first_failure {
        return Err(err.into());
    }

    let results = collector.await?;
    Ok(results)
}

fn spawn_collector(mut outcome_rx: mpsc::UnboundedReceiver<Outcome>) -> JoinHandle<ResultSet> {
    tokio::spawn(async move {
        let mut results = ResultSet::new();
        while let Some(outcome) = outcome_rx.recv().await {
            results.push(outcome);
        }
        results
    })
}

/// One worker: issue requests back to back until the deadline elapses.
///
/// The deadline is checked only between requests, never mid-flight, so the
/// final request may complete after the nominal deadline. No inter-request
/// delay.
async fn worker_loop(
    worker_id: usize,
    client: Client,
    url: String,
    deadline: Instant,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
) {
    let mut attempts = 0u64;
    while Instant::now() < deadline {
        let outcome = http::issue(&client, &url, worker_id).await;
        attempts += 1;
        if outcome_tx.send(outcome).is_err() {
            break;
        }
    }
    debug!("Worker {} finished after {} attempts", worker_id, attempts);
}
