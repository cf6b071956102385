use axum::http::HeaderMap;

use crate::server::{
    controller::util::cookie::request_cookies,
    error::{auth::AuthError, Error},
    model::session::{cookie_name, STATE_COOKIE},
};

/// Validate that the sign-in state cookie exists and matches `csrf_state`.
/// Returns `Ok(())` when valid or the appropriate `Error` otherwise.
pub fn validate_csrf(headers: &HeaderMap, secure: bool, csrf_state: &str) -> Result<(), Error> {
    let jar = request_cookies(headers);

    let Some(stored_state) = jar.get(&cookie_name(STATE_COOKIE, secure)) else {
        return Err(Error::AuthError(AuthError::CsrfMissingValue));
    };

    if stored_state != csrf_state {
        return Err(Error::AuthError(AuthError::CsrfValidationFailed));
    }

    Ok(())
}
