//! Error types for the Tourbook server application.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (authentication, configuration, GraphQL). All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod graphql;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, graphql::GraphqlError},
};

/// Main error type for the Tourbook server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let handlers and services use the `?` operator throughout.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session tokens, sign-in state, provider exchanges)
/// - GraphQL errors (transport, status, response errors, decoding)
/// - Upstream errors (the proxied backend origin could not be reached)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session token, CSRF state, OAuth2 provider).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// GraphQL operation failed.
    #[error(transparent)]
    GraphqlError(#[from] GraphqlError),
    /// Request to the backend origin failed or its response body could not be read.
    #[error(transparent)]
    UpstreamError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400, 401, 404 or 502 - For authentication failures, see `AuthError`
/// - 502 Bad Gateway - For GraphQL and backend origin failures
/// - 500 Internal Server Error - For configuration errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::GraphqlError(err) => err.into_response(),
            Self::UpstreamError(err) => BadGatewayError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

/// Wrapper type for converting an upstream failure into a 502 Bad Gateway response.
///
/// Used when a service this server depends on (backend origin, GraphQL endpoint, OAuth2
/// provider) fails. The full error is logged, the client receives a generic message.
pub struct BadGatewayError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for BadGatewayError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Upstream request failed: {}", self.0);

        (StatusCode::BAD_GATEWAY, Json(ErrorDto::new("Bad gateway"))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::server::error::{
        auth::AuthError, config::ConfigError, graphql::GraphqlError, Error,
    };

    #[test]
    /// Configuration errors never leak details and map to 500
    fn config_error_is_internal_server_error() {
        let resp = Error::from(ConfigError::MissingEnvVar("NEXTAUTH_SECRET".to_string()))
            .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    /// Authentication errors keep their own status mapping when wrapped
    fn auth_error_keeps_its_status() {
        let resp = Error::from(AuthError::SessionRequired).into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    /// GraphQL failures are reported as a bad gateway
    fn graphql_error_is_bad_gateway() {
        let resp = Error::from(GraphqlError::MissingData).into_response();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
