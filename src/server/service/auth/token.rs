//! Encrypted session token codec.
//!
//! Tokens are compact JWEs using direct encryption (`dir`) with `A256GCM`. The content key is
//! derived from the configured secret with HKDF-SHA256, so any process holding the same secret
//! reads and issues the same tokens.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use dioxus_logger::tracing;
use hkdf::Hkdf;
use josekit::{
    jwe::{Dir, JweHeader},
    jwt::{self, JwtPayload},
};
use rand::Rng;
use sha2::Sha256;

use crate::server::{error::auth::AuthError, model::session::SessionClaims};

/// HKDF info string for the session encryption key.
pub const KEY_INFO: &str = "NextAuth.js Generated Encryption Key";

const CONTENT_ENCRYPTION: &str = "A256GCM";

/// Content encryption key derived from the session secret.
#[derive(Clone)]
pub struct SessionKey([u8; 32]);

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

impl SessionKey {
    /// Derive the key for `secret`: HKDF-SHA256, empty salt, 32 bytes of output.
    pub fn derive(secret: &str) -> Result<Self, AuthError> {
        let hk = Hkdf::<Sha256>::new(Some(&[]), secret.as_bytes());
        let mut okm = [0u8; 32];
        hk.expand(KEY_INFO.as_bytes(), &mut okm)
            .map_err(|e| AuthError::KeyDerivation(e.to_string()))?;

        Ok(Self(okm))
    }

    /// Encrypt `claims` into a compact token.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        let mut header = JweHeader::new();
        header.set_content_encryption(CONTENT_ENCRYPTION);

        let map = serde_json::to_value(claims)
            .and_then(serde_json::from_value::<serde_json::Map<String, serde_json::Value>>)
            .map_err(AuthError::InvalidClaims)?;

        let payload = JwtPayload::from_map(map).map_err(AuthError::TokenEncrypt)?;
        let encrypter = Dir
            .encrypter_from_bytes(self.0)
            .map_err(AuthError::TokenEncrypt)?;

        jwt::encode_with_encrypter(&payload, &header, &encrypter).map_err(AuthError::TokenEncrypt)
    }

    /// Decrypt `token` and return its claims.
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Token decrypted with this key and not expired
    /// - `Err(AuthError::TokenDecrypt)` - Malformed token or encrypted with another key
    /// - `Err(AuthError::InvalidClaims)` - Payload is not a valid claim set
    /// - `Err(AuthError::TokenExpired)` - `exp` is in the past
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let decrypter = Dir
            .decrypter_from_bytes(self.0)
            .map_err(AuthError::TokenDecrypt)?;
        let (payload, _header) =
            jwt::decode_with_decrypter(token, &decrypter).map_err(AuthError::TokenDecrypt)?;

        let claims: SessionClaims =
            serde_json::from_value(serde_json::Value::Object(payload.claims_set().clone()))
                .map_err(AuthError::InvalidClaims)?;

        if claims.is_expired(Utc::now()) {
            return Err(AuthError::TokenExpired(claims.exp));
        }

        Ok(claims)
    }

    /// Decode `token`, treating every failure as an absent session.
    pub fn decode_or_absent(&self, token: &str) -> Option<SessionClaims> {
        match self.decode(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!("Ignoring session token: {}", e);
                None
            }
        }
    }
}

/// Random token id.
pub fn generate_jti() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}
