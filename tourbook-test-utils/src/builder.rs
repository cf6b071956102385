//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up configuration overrides and mock HTTP endpoints.
/// Methods can be chained together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Configuration overrides
    env: Vec<(String, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    tours_endpoints: Vec<(Vec<Value>, usize)>, // (tours, expected_requests)
    tours_error_endpoints: Vec<(String, usize)>, // (message, expected_requests)
    create_tour_endpoints: Vec<(Value, usize)>,
    // (method, status, body, expected_requests)
    backend_endpoints: Vec<(String, usize, String, usize)>,
    github_profiles: Vec<Value>,
    google_profiles: Vec<Value>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no overrides or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            env: Vec::new(),
            mock_builders: Vec::new(),
            tours_endpoints: Vec::new(),
            tours_error_endpoints: Vec::new(),
            create_tour_endpoints: Vec::new(),
            backend_endpoints: Vec::new(),
            github_profiles: Vec::new(),
            google_profiles: Vec::new(),
        }
    }

    /// Override a configuration value returned by `TestContext::env_var`.
    ///
    /// # Arguments
    /// - `key` - Environment variable name
    /// - `value` - Value to return for it
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Add a mock `GetTours` GraphQL endpoint returning `tours`.
    pub fn with_tours_endpoint(mut self, tours: Vec<Value>, expected_requests: usize) -> Self {
        self.tours_endpoints.push((tours, expected_requests));
        self
    }

    /// Add a mock `GetTours` GraphQL endpoint answering with a GraphQL error.
    pub fn with_tours_error_endpoint(
        mut self,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.tours_error_endpoints
            .push((message.into(), expected_requests));
        self
    }

    /// Add a mock `CreateTour` GraphQL endpoint returning `created`.
    pub fn with_create_tour_endpoint(mut self, created: Value, expected_requests: usize) -> Self {
        self.create_tour_endpoints.push((created, expected_requests));
        self
    }

    /// Add a mock endpoint at the backend origin root.
    ///
    /// # Arguments
    /// - `method` - HTTP method the endpoint answers
    /// - `status` - Status code to respond with
    /// - `body` - Response body text
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_backend_endpoint(
        mut self,
        method: impl Into<String>,
        status: usize,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.backend_endpoints
            .push((method.into(), status, body.into(), expected_requests));
        self
    }

    /// Add mock GitHub token and user endpoints answering with `profile`.
    pub fn with_github_endpoints(mut self, profile: Value) -> Self {
        self.github_profiles.push(profile);
        self
    }

    /// Add mock Google token and userinfo endpoints answering with `profile`.
    pub fn with_google_endpoints(mut self, profile: Value) -> Self {
        self.google_profiles.push(profile);
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by applying overrides and creating every mock endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        context.env.extend(self.env);

        for (tours, expected_requests) in self.tours_endpoints {
            let mock = context.tour().create_tours_endpoint(tours, expected_requests);
            context.mocks.push(mock);
        }

        for (message, expected_requests) in self.tours_error_endpoints {
            let mock = context
                .tour()
                .create_tours_error_endpoint(&message, expected_requests);
            context.mocks.push(mock);
        }

        for (created, expected_requests) in self.create_tour_endpoints {
            let mock = context
                .tour()
                .create_tour_mutation_endpoint(created, expected_requests);
            context.mocks.push(mock);
        }

        for (method, status, body, expected_requests) in self.backend_endpoints {
            let mock = context
                .backend()
                .create_root_endpoint(&method, status, &body, expected_requests);
            context.mocks.push(mock);
        }

        for profile in self.github_profiles {
            let mocks = context.auth().create_github_endpoints(profile);
            context.mocks.extend(mocks);
        }

        for profile in self.google_profiles {
            let mocks = context.auth().create_google_endpoints(profile);
            context.mocks.extend(mocks);
        }

        for builder in self.mock_builders {
            let mock = builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
