use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    controller::util::cookie::request_cookies,
    model::{
        app::AppState,
        session::{cookie_name, SessionClaims, SESSION_COOKIE},
    },
};

/// Read the raw session token from a request.
///
/// The session cookie is looked up under the name matching `secure` first, then under the other
/// name. Tokens too large for one cookie arrive split over `<name>.0`, `<name>.1`, ... and are
/// joined in index order. Without a cookie an `Authorization: Bearer` header is used.
pub fn extract_session_token(headers: &HeaderMap, secure: bool) -> Option<String> {
    let jar = request_cookies(headers);

    for name in [
        cookie_name(SESSION_COOKIE, secure),
        cookie_name(SESSION_COOKIE, !secure),
    ] {
        if let Some(token) = jar.get(&name).filter(|t| !t.is_empty()) {
            return Some(token.clone());
        }

        let mut token = String::new();
        let mut index = 0;
        while let Some(chunk) = jar.get(&format!("{}.{}", name, index)) {
            token.push_str(chunk);
            index += 1;
        }

        if !token.is_empty() {
            return Some(token);
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolve the caller's session, if the request carries a valid, unexpired token.
pub fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<SessionClaims> {
    let token = extract_session_token(headers, state.config.use_secure_cookies())?;

    state.session_key.decode_or_absent(&token)
}
