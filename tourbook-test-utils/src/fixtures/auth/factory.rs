//! Factory functions for session claims and reference session tokens.
//!
//! The encoder here is written independently of the application's codec so that tests can
//! check tokens produced by one decode correctly with the other.

use chrono::{Duration, Utc};
use hkdf::Hkdf;
use josekit::{
    jwe::{Dir, JweHeader},
    jwt::{self, JwtPayload},
};
use serde_json::{json, Value};
use sha2::Sha256;

use crate::error::TestError;

/// HKDF info string used to derive the session encryption key.
pub static SESSION_KEY_INFO: &str = "NextAuth.js Generated Encryption Key";

/// Create session claims for a signed-in user valid for the next 30 days.
pub fn mock_session_claims(name: &str) -> Value {
    let now = Utc::now();

    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "picture": "https://avatars.example.com/u/1",
        "sub": "1",
        "iat": now.timestamp(),
        "exp": (now + Duration::days(30)).timestamp(),
        "jti": "test_jti"
    })
}

/// Create session claims that expired an hour ago.
pub fn mock_expired_session_claims(name: &str) -> Value {
    let now = Utc::now();
    let mut claims = mock_session_claims(name);
    claims["iat"] = json!((now - Duration::days(31)).timestamp());
    claims["exp"] = json!((now - Duration::hours(1)).timestamp());

    claims
}

/// Derive the 32-byte content encryption key for `secret`.
pub fn derive_session_key(secret: &str) -> Result<[u8; 32], TestError> {
    let hk = Hkdf::<Sha256>::new(Some(&[]), secret.as_bytes());
    let mut okm = [0u8; 32];
    hk.expand(SESSION_KEY_INFO.as_bytes(), &mut okm)
        .map_err(|e| TestError::KeyDerivation(e.to_string()))?;

    Ok(okm)
}

/// Encrypt `claims` into a compact `dir`/`A256GCM` JWE using a key derived from `secret`.
///
/// # Returns
/// - `Ok(String)` - Compact serialized token
/// - `Err(TestError::ClaimsNotObject)` - `claims` was not a JSON object
/// - `Err(TestError::JoseError)` - Encryption failed
pub fn encode_session_token(secret: &str, claims: &Value) -> Result<String, TestError> {
    let Value::Object(map) = claims else {
        return Err(TestError::ClaimsNotObject);
    };

    let key = derive_session_key(secret)?;

    let mut header = JweHeader::new();
    header.set_content_encryption("A256GCM");

    let payload = JwtPayload::from_map(map.clone())?;
    let encrypter = Dir.encrypter_from_bytes(key)?;
    let token = jwt::encode_with_encrypter(&payload, &header, &encrypter)?;

    Ok(token)
}

/// Decrypt a token issued by the application back into its claim set.
pub fn decode_session_token(secret: &str, token: &str) -> Result<Value, TestError> {
    let key = derive_session_key(secret)?;
    let decrypter = Dir.decrypter_from_bytes(key)?;
    let (payload, _header) = jwt::decode_with_decrypter(token, &decrypter)?;

    Ok(Value::Object(payload.claims_set().clone()))
}
