//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a mock
//! HTTP server standing in for the tour backend, the GraphQL endpoint and the OAuth2 providers,
//! and it answers configuration lookups so the application's `Config` can be built against it.

use std::collections::HashMap;

use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{
        GITHUB_AUTHORIZE_PATH, GITHUB_TOKEN_PATH, GITHUB_USER_PATH, GOOGLE_AUTHORIZE_PATH,
        GOOGLE_TOKEN_PATH, GOOGLE_USERINFO_PATH, GRAPHQL_PATH, TEST_GITHUB_ID, TEST_GITHUB_SECRET,
        TEST_GOOGLE_CLIENT_ID, TEST_GOOGLE_CLIENT_SECRET, TEST_NEXTAUTH_SECRET, TEST_NEXTAUTH_URL,
    },
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Mock HTTP server (backend origin, GraphQL endpoint, OAuth2 providers)
/// - Configuration values pointing at that server
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_tours_endpoint(factory::mock_tours(2), 1)
///     .build()
///     .await?;
///
/// let config = Config::from_lookup(|key| test.env_var(key))?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
    /// Configuration values overriding the defaults
    pub(crate) env: HashMap<String, String>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and no overrides.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestContext {
            server,
            mocks: Vec::new(),
            env: HashMap::new(),
        })
    }

    /// Base URL of the mock server, used as the backend origin.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// URL of the mock GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.server.url(), GRAPHQL_PATH)
    }

    /// Mock GitHub endpoints as `(authorize, token, user)` URLs.
    pub fn github_endpoints(&self) -> (String, String, String) {
        let url = self.server.url();
        (
            format!("{}{}", url, GITHUB_AUTHORIZE_PATH),
            format!("{}{}", url, GITHUB_TOKEN_PATH),
            format!("{}{}", url, GITHUB_USER_PATH),
        )
    }

    /// Mock Google endpoints as `(authorize, token, userinfo)` URLs.
    pub fn google_endpoints(&self) -> (String, String, String) {
        let url = self.server.url();
        (
            format!("{}{}", url, GOOGLE_AUTHORIZE_PATH),
            format!("{}{}", url, GOOGLE_TOKEN_PATH),
            format!("{}{}", url, GOOGLE_USERINFO_PATH),
        )
    }

    /// Look up a configuration value the way the application reads environment variables.
    ///
    /// Overrides set with `TestBuilder::with_env` win over the defaults. Variables without a
    /// default resolve to `None`, exactly like an unset environment variable.
    pub fn env_var(&self, key: &str) -> Option<String> {
        if let Some(value) = self.env.get(key) {
            return Some(value.clone());
        }

        let value = match key {
            "NEXTAUTH_SECRET" => TEST_NEXTAUTH_SECRET.to_string(),
            "NEXTAUTH_URL" => TEST_NEXTAUTH_URL.to_string(),
            "BACKEND_URL" => self.url(),
            "GRAPHQL_URL" => self.graphql_url(),
            "GOOGLE_CLIENT_ID" => TEST_GOOGLE_CLIENT_ID.to_string(),
            "GOOGLE_CLIENT_SECRET" => TEST_GOOGLE_CLIENT_SECRET.to_string(),
            "GITHUB_ID" => TEST_GITHUB_ID.to_string(),
            "GITHUB_SECRET" => TEST_GITHUB_SECRET.to_string(),
            _ => return None,
        };

        Some(value)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
