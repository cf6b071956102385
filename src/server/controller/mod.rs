//! HTTP controller endpoints for the Tourbook web API.
//!
//! This module contains Axum handlers for OAuth2 sign-in, the session-aware backend proxy and
//! the tour catalogue. Controllers read the request, call into services and turn the outcome
//! into HTTP responses. They are documented for OpenAPI with utoipa.

pub mod auth;
pub mod proxy;
pub mod tour;
pub mod util;
