use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use serde_json::Value;

use crate::server::{
    config::{Config, OAuthProviderKind},
    error::auth::AuthError,
    model::session::UserProfile,
};

/// OAuth2 client with authorize, token and redirect URLs set.
pub type ProviderClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Build the OAuth2 client for `kind` from its configured credentials and endpoints.
pub fn provider_client(
    config: &Config,
    kind: OAuthProviderKind,
) -> Result<ProviderClient, AuthError> {
    let provider = config.provider(kind);
    let invalid = |e: oauth2::url::ParseError| AuthError::ProviderConfig {
        provider: kind.as_str().to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(provider.client_id.clone()))
        .set_client_secret(ClientSecret::new(provider.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(provider.endpoints.authorize_url.clone()).map_err(invalid)?)
        .set_token_uri(TokenUrl::new(provider.endpoints.token_url.clone()).map_err(invalid)?)
        .set_redirect_uri(RedirectUrl::new(config.callback_url(kind)).map_err(invalid)?);

    Ok(client)
}

/// Read the user's profile from a provider's userinfo response.
///
/// GitHub returns a numeric `id`, `name` (falling back to `login`) and `avatar_url`; Google
/// returns OpenID Connect claims `sub`, `name` and `picture`.
pub fn profile_from_json(
    kind: OAuthProviderKind,
    json: &Value,
) -> Result<UserProfile, AuthError> {
    let text = |key: &str| json.get(key).and_then(Value::as_str).map(String::from);

    let (id, name, image) = match kind {
        OAuthProviderKind::Github => (
            json.get("id").and_then(|id| match id {
                Value::Number(n) => Some(n.to_string()),
                Value::String(s) => Some(s.clone()),
                _ => None,
            }),
            text("name").or_else(|| text("login")),
            text("avatar_url"),
        ),
        OAuthProviderKind::Google => (text("sub"), text("name"), text("picture")),
    };

    let Some(id) = id else {
        return Err(AuthError::ProfileRequest {
            provider: kind.as_str().to_string(),
            reason: "profile response has no account id".to_string(),
        });
    };

    Ok(UserProfile {
        id,
        name,
        email: text("email"),
        image,
    })
}
