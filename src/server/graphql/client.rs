use std::sync::Arc;

use reqwest::{header::HeaderMap, Url};
use serde::de::DeserializeOwned;

use crate::server::{
    error::graphql::GraphqlError,
    graphql::{
        link::{ErrorLink, Link, RequestLink},
        operation::Operation,
        response::GraphqlResponse,
    },
};

/// GraphQL client bound to a single endpoint.
///
/// Cloning is cheap: the HTTP connection pool and the link chain are shared.
#[derive(Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: Url,
    links: Arc<Vec<Box<dyn Link>>>,
}

/// Builder for [`GraphqlClient`]. Links run in the order they are added.
pub struct GraphqlClientBuilder {
    http: Option<reqwest::Client>,
    endpoint: Url,
    links: Vec<Box<dyn Link>>,
}

impl GraphqlClientBuilder {
    /// Use an existing HTTP client instead of creating a new connection pool.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn link(mut self, link: impl Link + 'static) -> Self {
        self.links.push(Box::new(link));
        self
    }

    pub fn build(self) -> GraphqlClient {
        GraphqlClient {
            http: self.http.unwrap_or_default(),
            endpoint: self.endpoint,
            links: Arc::new(self.links),
        }
    }
}

impl GraphqlClient {
    pub fn builder(endpoint: Url) -> GraphqlClientBuilder {
        GraphqlClientBuilder {
            http: None,
            endpoint,
            links: Vec::new(),
        }
    }

    /// Create a client with the default chain: a [`RequestLink`] without extra headers
    /// followed by an [`ErrorLink`].
    pub fn new(endpoint: Url, http: reqwest::Client) -> Self {
        Self::builder(endpoint)
            .http_client(http)
            .link(RequestLink::new())
            .link(ErrorLink)
            .build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute `operation` and decode its `data` into `D`.
    ///
    /// Any GraphQL error entry fails the whole operation; partial data is discarded.
    ///
    /// # Returns
    /// - `Ok(D)` - The operation's decoded `data`
    /// - `Err(GraphqlError::Network)` - The request could not be sent or its body read
    /// - `Err(GraphqlError::Status)` - Non-success status without GraphQL errors in the body
    /// - `Err(GraphqlError::Response)` - The server reported GraphQL errors
    /// - `Err(GraphqlError::Decode)` - The body did not match the expected shape
    /// - `Err(GraphqlError::MissingData)` - Neither `data` nor `errors` were present
    pub async fn execute<D: DeserializeOwned>(
        &self,
        operation: &Operation,
    ) -> Result<D, GraphqlError> {
        let mut headers = HeaderMap::new();
        for link in self.links.iter() {
            link.on_request(operation, &mut headers);
        }

        let result = self.send(operation, headers).await;

        if let Err(error) = &result {
            for link in self.links.iter() {
                match error {
                    GraphqlError::Response(errors) => link.on_graphql_errors(operation, errors),
                    other => link.on_network_error(operation, other),
                }
            }
        }

        result
    }

    async fn send<D: DeserializeOwned>(
        &self,
        operation: &Operation,
        headers: HeaderMap,
    ) -> Result<D, GraphqlError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .headers(headers)
            .json(operation)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Some servers report resolver failures with a 4xx/5xx status and a GraphQL body
            if let Ok(GraphqlResponse::<serde_json::Value> {
                errors: Some(errors),
                ..
            }) = serde_json::from_str(&body)
            {
                if !errors.is_empty() {
                    return Err(GraphqlError::Response(errors));
                }
            }

            return Err(GraphqlError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // `errors` takes precedence over `data`, which may be partial
        let response: GraphqlResponse<serde_json::Value> = serde_json::from_str(&body)?;

        if let Some(errors) = response.errors {
            if !errors.is_empty() {
                return Err(GraphqlError::Response(errors));
            }
        }

        let data = response.data.ok_or(GraphqlError::MissingData)?;

        Ok(serde_json::from_value(data)?)
    }
}
