use dioxus_logger::tracing;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::server::{
    error::graphql::GraphqlError,
    graphql::{operation::Operation, response::GraphqlErrorEntry},
};

/// A step in the GraphQL client's request chain.
///
/// Links run in the order they were added to the client. Every hook has a no-op default so a
/// link only implements the stages it cares about.
pub trait Link: Send + Sync {
    /// Called before the request is sent. May add or replace outgoing headers.
    fn on_request(&self, _operation: &Operation, _headers: &mut HeaderMap) {}

    /// Called when the server answered with GraphQL errors.
    fn on_graphql_errors(&self, _operation: &Operation, _errors: &[GraphqlErrorEntry]) {}

    /// Called when the operation failed for any other reason (transport, status, decoding).
    fn on_network_error(&self, _operation: &Operation, _error: &GraphqlError) {}
}

/// Adds fixed headers to every outgoing request and logs each send.
#[derive(Default)]
pub struct RequestLink {
    headers: HeaderMap,
}

impl RequestLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header sent with every operation, e.g. an `authorization` bearer token.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl Link for RequestLink {
    fn on_request(&self, operation: &Operation, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }

        tracing::debug!(
            operation = %operation.operation_name,
            "Sending GraphQL request"
        );
    }
}

/// Logs GraphQL errors with message, locations and path, and network errors.
pub struct ErrorLink;

impl Link for ErrorLink {
    fn on_graphql_errors(&self, operation: &Operation, errors: &[GraphqlErrorEntry]) {
        for error in errors {
            tracing::error!(
                operation = %operation.operation_name,
                "[GraphQL error]: Message: {}, Location: {}, Path: {}",
                error.message,
                error.format_locations(),
                error.format_path()
            );
        }
    }

    fn on_network_error(&self, operation: &Operation, error: &GraphqlError) {
        tracing::error!(
            operation = %operation.operation_name,
            "[Network error]: {}",
            error
        );
    }
}
