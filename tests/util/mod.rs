//! Helpers building application state against a `TestContext`.

use tourbook::server::{
    config::{Config, ProviderEndpoints},
    model::app::AppState,
    startup::build_app_state,
};
use tourbook_test_utils::TestContext;

/// Extension trait for TestContext to build the application's config and state
pub trait TestContextExt {
    /// Config read from the context's environment, with OAuth2 endpoints on the mock server
    fn config(&self) -> Config;

    /// Application state built from `config()`
    fn state(&self) -> AppState;

    /// Application state built from `config()` after applying `modify`
    fn state_with<F: FnOnce(&mut Config)>(&self, modify: F) -> AppState;
}

impl TestContextExt for TestContext {
    fn config(&self) -> Config {
        let mut config = Config::from_lookup(|key| self.env_var(key))
            .expect("test environment should produce a valid config");

        let (authorize_url, token_url, userinfo_url) = self.github_endpoints();
        config.github.endpoints = ProviderEndpoints {
            authorize_url,
            token_url,
            userinfo_url,
        };

        let (authorize_url, token_url, userinfo_url) = self.google_endpoints();
        config.google.endpoints = ProviderEndpoints {
            authorize_url,
            token_url,
            userinfo_url,
        };

        config
    }

    fn state(&self) -> AppState {
        self.state_with(|_| {})
    }

    fn state_with<F: FnOnce(&mut Config)>(&self, modify: F) -> AppState {
        let mut config = self.config();
        modify(&mut config);

        build_app_state(config).expect("test config should produce an app state")
    }
}
