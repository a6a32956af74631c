use thiserror::Error;

/// Input problems caught before or while wiring the run together.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid target URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Expected a positive integer, got '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Expected a positive integer, got '{value}'")]
    ZeroNotAllowed { value: String },
    #[error("Failed to read cacert '{path}': {source}")]
    CacertUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid cacert '{path}': {source}")]
    CacertInvalid {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }
}
