use std::sync::Arc;

use reqwest::redirect::Policy;

use crate::server::{
    config::Config, error::Error, graphql::GraphqlClient, model::app::AppState,
    service::auth::token::SessionKey, service::proxy::ProxyClient,
};

/// Build the HTTP client shared by the proxy and the GraphQL client
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder().build()?;

    Ok(client)
}

/// Build the HTTP client for OAuth2 provider requests
///
/// Redirects are not followed so a provider response can never send the code exchange elsewhere.
pub fn build_oauth_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()?;

    Ok(client)
}

/// Derive the session key and construct every client the handlers share
pub fn build_app_state(config: Config) -> Result<AppState, Error> {
    let http = build_http_client()?;
    let session_key = SessionKey::derive(&config.session_secret)?;

    let graphql = GraphqlClient::new(config.graphql_url.clone(), http.clone());
    let proxy = ProxyClient::new(config.backend_url.clone(), http);

    Ok(AppState {
        config: Arc::new(config),
        graphql,
        proxy,
        session_key,
        http: build_oauth_client()?,
    })
}
