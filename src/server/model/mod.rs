//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to handlers and the claim set
//! carried inside encrypted session tokens, along with the cookie names they travel in.

pub mod app;
pub mod session;
