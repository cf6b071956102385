//! Application configuration read once at startup.
//!
//! Every value comes from an environment variable (optionally loaded from a `.env` file by the
//! entry point). Required values that are missing or malformed fail startup immediately.

use reqwest::Url;

use crate::server::error::config::ConfigError;

/// Environment variable names.
pub mod var {
    pub const NEXTAUTH_SECRET: &str = "NEXTAUTH_SECRET";
    pub const NEXTAUTH_URL: &str = "NEXTAUTH_URL";
    pub const BACKEND_URL: &str = "BACKEND_URL";
    pub const GRAPHQL_URL: &str = "GRAPHQL_URL";
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
    pub const GITHUB_ID: &str = "GITHUB_ID";
    pub const GITHUB_SECRET: &str = "GITHUB_SECRET";
    pub const PROXY_REQUIRE_SESSION: &str = "PROXY_REQUIRE_SESSION";
}

/// Public URL used when `NEXTAUTH_URL` is not set; the address `dx serve` listens on.
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

/// Supported OAuth2 sign-in providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProviderKind {
    Google,
    Github,
}

impl OAuthProviderKind {
    /// Parse the provider segment of `/api/auth/signin/{provider}`.
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "google" => Some(Self::Google),
            "github" => Some(Self::Github),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    /// Scopes requested at sign-in, enough to read the user's name, email and avatar.
    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            Self::Google => &["openid", "email", "profile"],
            Self::Github => &["read:user", "user:email"],
        }
    }
}

/// OAuth2 endpoints of a provider.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl ProviderEndpoints {
    /// The provider's production endpoints.
    pub fn for_kind(kind: OAuthProviderKind) -> Self {
        match kind {
            OAuthProviderKind::Google => Self {
                authorize_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
                token_url: "https://oauth2.googleapis.com/token".to_string(),
                userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
            },
            OAuthProviderKind::Github => Self {
                authorize_url: "https://github.com/login/oauth/authorize".to_string(),
                token_url: "https://github.com/login/oauth/access_token".to_string(),
                userinfo_url: "https://api.github.com/user".to_string(),
            },
        }
    }
}

/// Client credentials and endpoints of one OAuth2 provider.
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub kind: OAuthProviderKind,
    pub client_id: String,
    pub client_secret: String,
    pub endpoints: ProviderEndpoints,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret the session token encryption key is derived from.
    pub session_secret: String,
    /// Public base URL of the site, used for OAuth2 redirect URLs and cookie security.
    pub public_url: Url,
    /// Origin the `/api/get-token` proxy forwards to.
    pub backend_url: Url,
    /// GraphQL endpoint of the tour catalogue.
    pub graphql_url: Url,
    pub google: OAuthProviderConfig,
    pub github: OAuthProviderConfig,
    /// Reject proxy requests without a valid session token instead of forwarding them.
    pub proxy_require_session: bool,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns `None` for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A URL or boolean could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::MissingEnvVar(key.to_string())),
            }
        };

        let public_url = match lookup(var::NEXTAUTH_URL) {
            Some(value) if !value.trim().is_empty() => parse_url(var::NEXTAUTH_URL, &value)?,
            _ => parse_url(var::NEXTAUTH_URL, DEFAULT_PUBLIC_URL)?,
        };

        let proxy_require_session = match lookup(var::PROXY_REQUIRE_SESSION) {
            Some(value) => parse_bool(var::PROXY_REQUIRE_SESSION, &value)?,
            None => false,
        };

        Ok(Self {
            session_secret: required(var::NEXTAUTH_SECRET)?,
            public_url,
            backend_url: parse_url(var::BACKEND_URL, &required(var::BACKEND_URL)?)?,
            graphql_url: parse_url(var::GRAPHQL_URL, &required(var::GRAPHQL_URL)?)?,
            google: OAuthProviderConfig {
                kind: OAuthProviderKind::Google,
                client_id: required(var::GOOGLE_CLIENT_ID)?,
                client_secret: required(var::GOOGLE_CLIENT_SECRET)?,
                endpoints: ProviderEndpoints::for_kind(OAuthProviderKind::Google),
            },
            github: OAuthProviderConfig {
                kind: OAuthProviderKind::Github,
                client_id: required(var::GITHUB_ID)?,
                client_secret: required(var::GITHUB_SECRET)?,
                endpoints: ProviderEndpoints::for_kind(OAuthProviderKind::Github),
            },
            proxy_require_session,
        })
    }

    pub fn provider(&self, kind: OAuthProviderKind) -> &OAuthProviderConfig {
        match kind {
            OAuthProviderKind::Google => &self.google,
            OAuthProviderKind::Github => &self.github,
        }
    }

    /// Whether cookies get the `__Secure-` prefix and the secure attribute.
    pub fn use_secure_cookies(&self) -> bool {
        self.public_url.scheme() == "https"
    }

    /// Redirect URL registered with `kind` for the OAuth2 callback.
    pub fn callback_url(&self, kind: OAuthProviderKind) -> String {
        format!(
            "{}/api/auth/callback/{}",
            self.public_url.as_str().trim_end_matches('/'),
            kind.as_str()
        )
    }
}

fn parse_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("unsupported URL scheme {:?}", scheme),
        }),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
