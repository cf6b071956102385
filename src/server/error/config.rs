use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading configuration at startup.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but could not be parsed into a URL or boolean.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ConfigError {
    /// Name of the environment variable at fault.
    pub fn var(&self) -> &str {
        match self {
            Self::MissingEnvVar(var) => var,
            Self::InvalidEnvValue { var, .. } => var,
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
