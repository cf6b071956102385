use std::sync::Arc;

use crate::server::{
    config::Config, graphql::GraphqlClient, service::auth::token::SessionKey,
    service::proxy::ProxyClient,
};

/// Shared state handed to every handler. Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub graphql: GraphqlClient,
    pub proxy: ProxyClient,
    pub session_key: SessionKey,
    /// Client for OAuth2 provider requests; redirects are disabled.
    pub http: reqwest::Client,
}
