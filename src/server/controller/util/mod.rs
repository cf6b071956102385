//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: reading and building the
//! session and sign-in state cookies, validating the OAuth2 state on callback, and resolving
//! the caller's session token from a request.

pub mod cookie;
pub mod csrf;
pub mod session;
