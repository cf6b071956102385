use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, session::SessionDto},
    server::{
        config::OAuthProviderKind,
        controller::util::{
            cookie::{removal_cookie, request_cookies, session_cookie, state_cookie},
            csrf::validate_csrf,
            session::resolve_session,
        },
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{cookie_name, SESSION_COOKIE, STATE_COOKIE},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

fn parse_provider(provider: &str) -> Result<OAuthProviderKind, Error> {
    OAuthProviderKind::from_path(provider)
        .ok_or_else(|| Error::AuthError(AuthError::UnknownProvider(provider.to_string())))
}

/// Sign-in route to initiate login with an OAuth2 provider
///
/// Creates the provider's authorize URL with a random state, stores that state in a short-lived
/// cookie and redirects the user to the provider.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the provider to begin signing in
/// - 404 (Not Found): The provider is not supported
/// - 500 (Internal Server Error): The provider's endpoints are misconfigured
#[utoipa::path(
    get,
    path = "/api/auth/signin/{provider}",
    tag = AUTH_TAG,
    params(("provider" = String, Path, description = "Sign-in provider, `google` or `github`")),
    responses(
        (status = 307, description = "Redirect to the provider's authorize URL"),
        (status = 404, description = "Unknown sign-in provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_provider(&provider)?;
    let secure = state.config.use_secure_cookies();

    let login = login_service(&state.config, kind)?;

    Ok((
        AppendHeaders([(SET_COOKIE, state_cookie(login.state, secure).to_string())]),
        Redirect::temporary(&login.authorize_url),
    ))
}

/// Callback route the provider redirects to after the user approved the sign-in
///
/// Validates the state against the cookie set at sign-in, exchanges the code for an access
/// token, reads the user's profile and issues an encrypted session token cookie.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful sign-in, redirect to the home page
/// - 400 (Bad Request): State missing or not matching the sign-in cookie
/// - 404 (Not Found): The provider is not supported
/// - 502 (Bad Gateway): The provider rejected the code or the profile request failed
#[utoipa::path(
    get,
    path = "/api/auth/callback/{provider}",
    tag = AUTH_TAG,
    params(
        ("provider" = String, Path, description = "Sign-in provider, `google` or `github`"),
        ("code" = String, Query, description = "Authorization code issued by the provider"),
        ("state" = String, Query, description = "State echoed back by the provider")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the home page"),
        (status = 400, description = "State validation failed", body = ErrorDto),
        (status = 404, description = "Unknown sign-in provider", body = ErrorDto),
        (status = 502, description = "Provider request failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    headers: HeaderMap,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let kind = parse_provider(&provider)?;
    let secure = state.config.use_secure_cookies();

    validate_csrf(&headers, secure, &params.0.state)?;

    let callback_service = CallbackService::new(&state.config, &state.http, &state.session_key);
    let (token, _claims) = callback_service
        .handle_callback(kind, params.0.code)
        .await?;

    Ok((
        AppendHeaders([
            (SET_COOKIE, session_cookie(token, secure).to_string()),
            (SET_COOKIE, removal_cookie(STATE_COOKIE, secure).to_string()),
        ]),
        Redirect::temporary("/"),
    ))
}

/// Signs the user out by clearing their session cookie
///
/// # Responses
/// - 307 (Temporary Redirect): Session cookie cleared, redirect to the home page
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the home page")
    ),
)]
pub async fn signout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let secure = state.config.use_secure_cookies();
    let session_cookie_name = cookie_name(SESSION_COOKIE, secure);

    let mut cookies = vec![(
        SET_COOKIE,
        removal_cookie(SESSION_COOKIE, secure).to_string(),
    )];

    // Chunked tokens leave one cookie per chunk behind
    for name in request_cookies(&headers).into_keys() {
        let is_chunk = name
            .strip_prefix(&session_cookie_name)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|index| index.parse::<u32>().is_ok());

        if is_chunk {
            let mut removal = removal_cookie(SESSION_COOKIE, secure);
            removal.set_name(name);
            cookies.push((SET_COOKIE, removal.to_string()));
        }
    }

    (AppendHeaders(cookies), Redirect::temporary("/"))
}

/// Get the current session
///
/// # Responses
/// - 200 (OK): The signed-in user's name, email, image and session expiry
/// - 404 (Not Found): No valid session token in the request
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session", body = SessionDto),
        (status = 404, description = "No session", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let Some(claims) = resolve_session(&state, &headers) else {
        return Err(Error::AuthError(AuthError::SessionNotFound));
    };

    Ok(Json(claims.to_dto()))
}
