use std::collections::HashMap;

use axum::http::{header::COOKIE, HeaderMap};
use cookie::{Cookie, SameSite};

use crate::server::model::session::{
    cookie_name, SESSION_COOKIE, SESSION_MAX_AGE_DAYS, STATE_COOKIE, STATE_MAX_AGE_MINUTES,
};

/// Every cookie sent with the request, by name. Later duplicates win.
pub fn request_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut jar = HashMap::new();

    for value in headers.get_all(COOKIE) {
        let Ok(value) = value.to_str() else {
            continue;
        };

        for cookie in Cookie::split_parse(value).flatten() {
            jar.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }

    jar
}

fn base_cookie(name: String, value: String, secure: bool) -> cookie::CookieBuilder<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
}

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    base_cookie(cookie_name(SESSION_COOKIE, secure), token, secure)
        .max_age(time::Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// Short-lived cookie holding the OAuth2 state until the provider redirects back.
pub fn state_cookie(state: String, secure: bool) -> Cookie<'static> {
    base_cookie(cookie_name(STATE_COOKIE, secure), state, secure)
        .max_age(time::Duration::minutes(STATE_MAX_AGE_MINUTES))
        .build()
}

/// Cookie instructing the browser to drop `cookie`.
pub fn removal_cookie(cookie: &str, secure: bool) -> Cookie<'static> {
    let mut removal = base_cookie(cookie_name(cookie, secure), String::new(), secure).build();
    removal.make_removal();

    removal
}
