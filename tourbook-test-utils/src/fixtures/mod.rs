//! Test fixture modules for tokens, records and HTTP mock creation.
//!
//! - `auth` - session tokens and OAuth2 provider endpoints
//! - `backend` - the proxied backend origin
//! - `tour` - tour records and GraphQL endpoints

pub mod auth;
pub mod backend;
pub mod tour;
