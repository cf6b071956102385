use chrono::Utc;
use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, TokenResponse};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::server::{
    config::{Config, OAuthProviderKind},
    error::auth::AuthError,
    model::session::{SessionClaims, UserProfile},
    service::auth::{
        provider::{profile_from_json, provider_client},
        token::{generate_jti, SessionKey},
    },
};

/// User agent sent to providers; GitHub rejects API requests without one.
const PROVIDER_USER_AGENT: &str = concat!("tourbook/", env!("CARGO_PKG_VERSION"));

/// Completes a provider sign-in and issues the session token.
pub struct CallbackService<'a> {
    config: &'a Config,
    http: &'a reqwest::Client,
    key: &'a SessionKey,
}

impl<'a> CallbackService<'a> {
    pub fn new(config: &'a Config, http: &'a reqwest::Client, key: &'a SessionKey) -> Self {
        Self { config, http, key }
    }

    /// Exchange `code` for an access token, read the user's profile and issue a session token.
    ///
    /// # Returns
    /// - `Ok((String, SessionClaims))` - Encrypted session token and the claims inside it
    /// - `Err(AuthError::TokenExchange)` - The provider rejected the code or was unreachable
    /// - `Err(AuthError::ProfileRequest)` - The profile could not be fetched or read
    pub async fn handle_callback(
        &self,
        kind: OAuthProviderKind,
        code: String,
    ) -> Result<(String, SessionClaims), AuthError> {
        let profile = self.authenticate(kind, code).await?;

        tracing::debug!(provider = %kind.as_str(), sub = %profile.id, "User signed in");

        let claims = SessionClaims::issue(profile, Utc::now(), generate_jti());
        let token = self.key.encode(&claims)?;

        Ok((token, claims))
    }

    async fn authenticate(
        &self,
        kind: OAuthProviderKind,
        code: String,
    ) -> Result<UserProfile, AuthError> {
        let client = provider_client(self.config, kind)?;

        let token = client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http)
            .await
            .map_err(|e| AuthError::TokenExchange {
                provider: kind.as_str().to_string(),
                reason: e.to_string(),
            })?;

        let profile_error = |reason: String| AuthError::ProfileRequest {
            provider: kind.as_str().to_string(),
            reason,
        };

        let response = self
            .http
            .get(&self.config.provider(kind).endpoints.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, PROVIDER_USER_AGENT)
            .send()
            .await
            .map_err(|e| profile_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(profile_error(format!("status {}", response.status())));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| profile_error(e.to_string()))?;

        profile_from_json(kind, &json)
    }
}
