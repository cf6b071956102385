use oauth2::{CsrfToken, Scope};

use crate::server::{
    config::{Config, OAuthProviderKind},
    error::auth::AuthError,
    service::auth::provider::provider_client,
};

/// Authorize URL to send the user to, and the state the callback must echo back.
pub struct SignIn {
    pub authorize_url: String,
    pub state: String,
}

/// Build the provider's authorize URL with a fresh random state.
pub fn login_service(config: &Config, kind: OAuthProviderKind) -> Result<SignIn, AuthError> {
    let client = provider_client(config, kind)?;

    let (url, state) = client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(kind.scopes().iter().map(|s| Scope::new(s.to_string())))
        .url();

    Ok(SignIn {
        authorize_url: url.to_string(),
        state: state.secret().to_string(),
    })
}
