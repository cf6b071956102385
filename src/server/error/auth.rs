use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{BadGatewayError, InternalServerError},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request requires a valid session token but none was presented")]
    SessionRequired,
    #[error("No valid session token present in request")]
    SessionNotFound,
    #[error("Unknown sign-in provider: {0:?}")]
    UnknownProvider(String),
    #[error("Failed to sign in user due to OAuth2 state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to sign in user due to OAuth2 state cookie missing from callback request")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code with {provider}: {reason}")]
    TokenExchange { provider: String, reason: String },
    #[error("Failed to fetch user profile from {provider}: {reason}")]
    ProfileRequest { provider: String, reason: String },
    #[error("Invalid OAuth2 endpoint configured for {provider}: {reason}")]
    ProviderConfig { provider: String, reason: String },
    #[error("Failed to derive session encryption key: {0}")]
    KeyDerivation(String),
    #[error("Failed to decrypt session token: {0}")]
    TokenDecrypt(josekit::JoseError),
    #[error("Failed to encrypt session token: {0}")]
    TokenEncrypt(josekit::JoseError),
    #[error("Session token claims are malformed: {0}")]
    InvalidClaims(serde_json::Error),
    #[error("Session token expired at {0}")]
    TokenExpired(i64),
}

impl AuthError {
    fn error_response(status: StatusCode, message: &str) -> Response {
        (status, Json(ErrorDto::new(message))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::SessionRequired
            | Self::TokenDecrypt(_)
            | Self::InvalidClaims(_)
            | Self::TokenExpired(_) => {
                tracing::debug!("{}", self);

                Self::error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::SessionNotFound => {
                tracing::debug!("{}", self);

                Self::error_response(StatusCode::NOT_FOUND, "Session not found")
            }
            Self::UnknownProvider(ref provider) => {
                tracing::debug!(provider = %provider, "{}", self);

                Self::error_response(StatusCode::NOT_FOUND, "Unknown sign-in provider")
            }
            Self::CsrfValidationFailed | Self::CsrfMissingValue => {
                tracing::debug!("{}", self);

                Self::error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue signing you in, please try again.",
                )
            }
            Self::TokenExchange { .. } | Self::ProfileRequest { .. } => {
                BadGatewayError(self).into_response()
            }
            Self::ProviderConfig { .. } | Self::KeyDerivation(_) | Self::TokenEncrypt(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
