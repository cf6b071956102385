//! Tests for the backend proxy endpoint.

mod get_token;

use super::*;
