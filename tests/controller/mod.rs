//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, sign-in flows, the backend proxy and
//! error handling for all API endpoints.

mod auth;
mod proxy;
mod tour;

use tourbook_test_utils::prelude::*;

use crate::util::TestContextExt;

/// Read a response body to a string
async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    String::from_utf8(bytes.to_vec()).expect("response body should be utf-8")
}
