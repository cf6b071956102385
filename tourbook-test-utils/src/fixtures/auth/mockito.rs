//! OAuth2 provider HTTP mock endpoint creation utilities.
//!
//! Each provider needs two endpoints for a complete sign-in: the token exchange and the profile
//! lookup made with the returned access token.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{
        GITHUB_TOKEN_PATH, GITHUB_USER_PATH, GOOGLE_TOKEN_PATH, GOOGLE_USERINFO_PATH,
        TEST_ACCESS_TOKEN,
    },
    fixtures::auth::AuthFixtures,
};

impl<'a> AuthFixtures<'a> {
    /// Create mock GitHub token and user endpoints.
    ///
    /// # Arguments
    /// - `profile` - JSON body returned by `GET /user`
    ///
    /// # Returns
    /// - `Vec<Mock>` - Token and profile endpoints, each expected to be called once
    pub fn create_github_endpoints(&mut self, profile: Value) -> Vec<Mock> {
        self.create_provider_endpoints(GITHUB_TOKEN_PATH, GITHUB_USER_PATH, profile)
    }

    /// Create mock Google token and userinfo endpoints.
    pub fn create_google_endpoints(&mut self, profile: Value) -> Vec<Mock> {
        self.create_provider_endpoints(GOOGLE_TOKEN_PATH, GOOGLE_USERINFO_PATH, profile)
    }

    fn create_provider_endpoints(
        &mut self,
        token_path: &str,
        profile_path: &str,
        profile: Value,
    ) -> Vec<Mock> {
        let token = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "bearer",
            "expires_in": 3600
        });

        let token_endpoint = self
            .context
            .server
            .mock("POST", token_path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token.to_string())
            .expect(1)
            .create();

        let profile_endpoint = self
            .context
            .server
            .mock("GET", profile_path)
            .match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(profile.to_string())
            .expect(1)
            .create();

        vec![token_endpoint, profile_endpoint]
    }
}
