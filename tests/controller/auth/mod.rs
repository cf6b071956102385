//! Tests for authentication controller endpoints.
//!
//! This module contains integration tests for authentication-related HTTP endpoints,
//! including the provider sign-in redirect, OAuth2 callback handling, sign-out and the
//! current session lookup.

mod callback;
mod session;
mod signin;
mod signout;

use super::*;
