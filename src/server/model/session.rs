use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::session::SessionDto;

/// Cookie carrying the encrypted session token.
pub const SESSION_COOKIE: &str = "next-auth.session-token";

/// Cookie holding the OAuth2 state between sign-in and callback.
pub const STATE_COOKIE: &str = "next-auth.state";

/// Prefix browsers only accept on cookies set with the secure attribute over https.
pub const SECURE_COOKIE_PREFIX: &str = "__Secure-";

/// How long an issued session token stays valid.
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

/// How long the sign-in state cookie lives; the user must finish signing in within this window.
pub const STATE_MAX_AGE_MINUTES: i64 = 15;

/// Name of `cookie` for the current cookie security setting.
pub fn cookie_name(cookie: &str, secure: bool) -> String {
    if secure {
        format!("{}{}", SECURE_COOKIE_PREFIX, cookie)
    } else {
        cookie.to_string()
    }
}

/// Claims carried inside an encrypted session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Provider account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default)]
    pub iat: i64,
    /// Expiry as unix seconds
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Profile fields read from an OAuth2 provider, used to issue a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl SessionClaims {
    /// Claims for a new session of `profile` starting at `now`.
    pub fn issue(profile: UserProfile, now: DateTime<Utc>, jti: String) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            picture: profile.image,
            sub: Some(profile.id),
            iat: now.timestamp(),
            exp: (now + Duration::days(SESSION_MAX_AGE_DAYS)).timestamp(),
            jti: Some(jti),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    pub fn to_dto(&self) -> SessionDto {
        SessionDto {
            name: self.name.clone(),
            email: self.email.clone(),
            image: self.picture.clone(),
            expires: DateTime::from_timestamp(self.exp, 0).unwrap_or_default(),
        }
    }
}
