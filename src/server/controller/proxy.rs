use axum::{
    extract::State,
    http::{HeaderMap, Method},
    response::IntoResponse,
};
use dioxus_logger::tracing;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::session::resolve_session,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

pub static PROXY_TAG: &str = "proxy";

/// Forward the request to the backend origin and return its response unchanged
///
/// Accepts any HTTP method. The method and headers are sent on to the configured backend
/// origin without a body; the backend's status, headers and body text are relayed verbatim.
/// The caller's session token is resolved from cookies or an `Authorization: Bearer` header;
/// by default the request is forwarded whether or not a valid token is present.
///
/// # Responses
/// - Any status: The backend's response
/// - 401 (Unauthorized): No valid session token and sessions are required for the proxy
/// - 502 (Bad Gateway): The backend origin could not be reached
#[utoipa::path(
    method(get, post, put, delete, patch, head, options),
    path = "/api/get-token",
    tag = PROXY_TAG,
    responses(
        (status = 200, description = "Backend response relayed unchanged (any status)", body = String),
        (status = 401, description = "Session required but none presented", body = ErrorDto),
        (status = 502, description = "Backend origin unreachable", body = ErrorDto)
    ),
)]
pub async fn get_token(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let session = resolve_session(&state, &headers);

    match &session {
        Some(claims) => tracing::debug!(sub = ?claims.sub, "Proxying request with session"),
        None if state.config.proxy_require_session => {
            return Err(Error::AuthError(AuthError::SessionRequired))
        }
        None => tracing::debug!("Proxying request without session"),
    }

    let response = state.proxy.forward(method, &headers).await?;

    Ok(response)
}
