use clap::Parser;

use crate::error::{AppError, AppResult, ValidationError};

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_DURATION_SECS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = concat!("dynoload/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load tester - fixed-duration worker pool, channel-fed result collection, aggregate throughput/latency/error stats."
)]
pub struct LoadArgs {
    /// Target URL to test
    #[arg(value_parser = parse_target_url)]
    pub url: String,

    /// Number of concurrent workers
    #[arg(long, default_value_t = DEFAULT_WORKERS, value_parser = parse_positive_usize)]
    pub workers: usize,

    /// Test duration in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: u64,

    /// Extra PEM root certificate appended to the bundled trust store
    #[arg(long)]
    pub cacert: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_target_url(s: &str) -> AppResult<String> {
    match url::Url::parse(s) {
        Ok(_) => Ok(s.to_owned()),
        Err(err) => Err(AppError::validation(ValidationError::InvalidUrl {
            value: s.to_owned(),
            source: err,
        })),
    }
}

fn parse_positive_usize(s: &str) -> AppResult<usize> {
    let value: usize = s.trim().parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidInteger {
            value: s.to_owned(),
            source: err,
        })
    })?;
    if value == 0 {
        return Err(AppError::validation(ValidationError::ZeroNotAllowed {
            value: s.to_owned(),
        }));
    }
    Ok(value)
}
