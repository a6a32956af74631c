use reqwest::{Certificate, Client};

use crate::args::{DEFAULT_USER_AGENT, LoadArgs};
use crate::error::{AppError, AppResult, ValidationError};

/// Builds the shared connection context for one run.
///
/// TLS verification uses the bundled webpki root store rather than the
/// platform store; `--cacert` appends one extra PEM root on top of it.
/// Deliberately no request or connect timeout: an in-flight request always
/// runs to completion or failure before its worker re-checks the deadline.
///
/// # Errors
///
/// Returns an error when the cacert file cannot be read or parsed, or when
/// the client itself cannot be constructed.
pub fn build_client(args: &LoadArgs) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if let Some(path) = args.cacert.as_ref() {
        let bytes = std::fs::read(path).map_err(|err| {
            AppError::validation(ValidationError::CacertUnreadable {
                path: path.clone(),
                source: err,
            })
        })?;
        let cert = Certificate::from_pem(&bytes).map_err(|err| {
            AppError::validation(ValidationError::CacertInvalid {
                path: path.clone(),
                source: err,
            })
        })?;
        builder = builder.add_root_certificate(cert);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base_args() -> Result<LoadArgs, String> {
        LoadArgs::try_parse_from(["dynoload", "http://localhost"])
            .map_err(|err| format!("parse failed: {}", err))
    }

    #[test]
    fn builds_without_extra_root() -> Result<(), String> {
        let args = base_args()?;
        build_client(&args).map_err(|err| format!("build failed: {}", err))?;
        Ok(())
    }

    #[test]
    fn rejects_missing_cacert() -> Result<(), String> {
        let mut args = base_args()?;
        args.cacert = Some("/nonexistent/bundle.pem".to_owned());
        if build_client(&args).is_ok() {
            return Err("Expected missing cacert to fail".to_owned());
        }
        Ok(())
    }
}
