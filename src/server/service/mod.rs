//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and coordinates the
//! external systems the server talks to: OAuth2 sign-in and session tokens, the backend origin
//! behind the request proxy, and the GraphQL tour catalogue.

pub mod auth;
pub mod proxy;
pub mod tour;
