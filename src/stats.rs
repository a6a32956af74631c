use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What one request attempt produced: an HTTP status from a completed
/// exchange, or the error sentinel when the attempt never completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Http(u16),
    Error,
}

impl RequestStatus {
    /// Only an exact 200 counts as success; 201/204/3xx are failures for
    /// aggregate purposes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Http(200))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Http(code) => write!(f, "{}", code),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Immutable record of one request attempt. Created once at request
/// completion, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: RequestStatus,
    pub latency: Duration,
    pub error_detail: Option<String>,
    pub worker_id: usize,
    pub timestamp: DateTime<Utc>,
}

impl Outcome {
    #[must_use]
    pub fn http(status: u16, latency: Duration, worker_id: usize) -> Self {
        Self {
            status: RequestStatus::Http(status),
            latency,
            error_detail: None,
            worker_id,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn error(detail: String, worker_id: usize) -> Self {
        Self {
            status: RequestStatus::Error,
            latency: Duration::ZERO,
            error_detail: Some(detail),
            worker_id,
            timestamp: Utc::now(),
        }
    }
}

/// All outcomes collected during one run, in append order.
pub type ResultSet = Vec<Outcome>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub failed_request_statuses: Vec<RequestStatus>,
    pub requests_per_second: f64,
    pub average_latency_secs: f64,
    pub error_rate: f64,
}

/// Reducer output: a populated summary, or the explicit empty marker when
/// the run produced no outcomes at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Analysis {
    NoResults,
    Summary(Summary),
}

/// Pure reduction of a [`ResultSet`] into aggregate statistics.
///
/// `requests_per_second` divides by the *configured* duration, not the
/// measured wall clock. `average_latency_secs` covers status-200 outcomes
/// only and is `0` when there are none.
#[must_use]
pub fn analyze(results: &[Outcome], configured_duration: Duration) -> Analysis {
    if results.is_empty() {
        return Analysis::NoResults;
    }

    let total_requests = results.len();
    let mut successful_requests = 0usize;
    let mut success_latency = Duration::ZERO;
    let mut failed_request_statuses = Vec::new();

    for outcome in results {
        if outcome.status.is_success() {
            successful_requests += 1;
            success_latency += outcome.latency;
        } else {
            failed_request_statuses.push(outcome.status);
        }
    }

    let failed_requests = total_requests - successful_requests;

    let duration_secs = configured_duration.as_secs_f64();
    let requests_per_second = if duration_secs > 0.0 {
        total_requests as f64 / duration_secs
    } else {
        0.0
    };

    let average_latency_secs = if successful_requests > 0 {
        success_latency.as_secs_f64() / successful_requests as f64
    } else {
        0.0
    };

    let error_rate = failed_requests as f64 / total_requests as f64;

    Analysis::Summary(Summary {
        total_requests,
        successful_requests,
        failed_requests,
        failed_request_statuses,
        requests_per_second,
        average_latency_secs,
        error_rate,
    })
}
