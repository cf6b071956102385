//! Server application core modules.
//!
//! This module contains all server-side functionality for the Tourbook application: HTTP routing,
//! OAuth2 sign-in with stateless encrypted session tokens, the session-aware proxy to the backend
//! origin, and the GraphQL client for the tour catalogue.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod graphql;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
