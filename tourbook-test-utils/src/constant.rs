//! Test configuration constants.
//!
//! This module defines the placeholder values used across all tests when building the
//! application configuration. None of these are real credentials.

/// Session signing secret used to derive the session token encryption key in tests.
pub static TEST_NEXTAUTH_SECRET: &str = "tourbook-test-secret-value";

/// A different secret, used to produce tokens the application must not accept.
pub static TEST_FOREIGN_SECRET: &str = "some-other-application-secret";

/// Public base URL of the site under test.
pub static TEST_NEXTAUTH_URL: &str = "http://localhost:8080";

/// Mock Google OAuth2 client ID.
pub static TEST_GOOGLE_CLIENT_ID: &str = "google_client_id";

/// Mock Google OAuth2 client secret.
pub static TEST_GOOGLE_CLIENT_SECRET: &str = "google_client_secret";

/// Mock GitHub OAuth2 client ID.
pub static TEST_GITHUB_ID: &str = "github_client_id";

/// Mock GitHub OAuth2 client secret.
pub static TEST_GITHUB_SECRET: &str = "github_client_secret";

/// Access token handed out by the mock OAuth2 token endpoints.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Path of the GraphQL endpoint on the mock server.
pub static GRAPHQL_PATH: &str = "/graphql";

/// Paths of the mock GitHub OAuth2 endpoints.
pub static GITHUB_AUTHORIZE_PATH: &str = "/login/oauth/authorize";
pub static GITHUB_TOKEN_PATH: &str = "/login/oauth/access_token";
pub static GITHUB_USER_PATH: &str = "/user";

/// Paths of the mock Google OAuth2 endpoints.
pub static GOOGLE_AUTHORIZE_PATH: &str = "/o/oauth2/v2/auth";
pub static GOOGLE_TOKEN_PATH: &str = "/token";
pub static GOOGLE_USERINFO_PATH: &str = "/v1/userinfo";
