use super::*;
use axum::{
    extract::State,
    http::{header::COOKIE, HeaderMap, HeaderValue, Method, StatusCode},
    response::IntoResponse,
};
use reqwest::Url;
use tourbook::server::controller::proxy::get_token;
use tourbook_test_utils::{
    constant::{TEST_FOREIGN_SECRET, TEST_NEXTAUTH_SECRET},
    fixtures::backend::mockito::BACKEND_MARKER_HEADER,
};

fn session_headers(secret: &str) -> Result<HeaderMap, TestError> {
    let claims = auth_factory::mock_session_claims("Ada Lovelace");
    let token = auth_factory::encode_session_token(secret, &claims)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("next-auth.session-token={}", token)).unwrap(),
    );

    Ok(headers)
}

#[tokio::test]
/// Tests that the backend's status, body and headers are relayed unchanged
///
/// Expected: 200 with the backend body and marker header
async fn relays_backend_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("GET", 200, "hello from backend", 1)
        .build()
        .await?;
    let headers = session_headers(TEST_NEXTAUTH_SECRET)?;

    let resp = get_token(State(test.state()), Method::GET, headers)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[BACKEND_MARKER_HEADER], "tour-backend");
    assert_eq!(body_text(resp).await, "hello from backend");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that a request without a session cookie is still forwarded
///
/// Expected: backend response returned as-is
async fn forwards_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("GET", 200, "anonymous ok", 1)
        .build()
        .await?;

    let resp = get_token(State(test.state()), Method::GET, HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "anonymous ok");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that backend error statuses are relayed rather than replaced
async fn relays_backend_error_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("PUT", 503, "maintenance", 1)
        .build()
        .await?;

    let resp = get_token(State(test.state()), Method::PUT, HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_text(resp).await, "maintenance");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that requests without a session are rejected when sessions are required
///
/// Expected: 401, backend never called
async fn rejects_without_session_when_required() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("GET", 200, "secret", 0)
        .build()
        .await?;
    let state = test.state_with(|config| config.proxy_require_session = true);

    let resp = get_token(State(state), Method::GET, HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that a token issued under another secret counts as no session
async fn rejects_foreign_token_when_required() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("GET", 200, "secret", 0)
        .build()
        .await?;
    let state = test.state_with(|config| config.proxy_require_session = true);
    let headers = session_headers(TEST_FOREIGN_SECRET)?;

    let resp = get_token(State(state), Method::GET, headers)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that a valid session passes when sessions are required
async fn forwards_with_session_when_required() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("GET", 200, "secret", 1)
        .build()
        .await?;
    let state = test.state_with(|config| config.proxy_require_session = true);
    let headers = session_headers(TEST_NEXTAUTH_SECRET)?;

    let resp = get_token(State(state), Method::GET, headers)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "secret");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests the response when the backend origin cannot be reached
///
/// Expected: 502 Bad Gateway
async fn fails_when_backend_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.state_with(|config| {
        config.backend_url = Url::parse("http://127.0.0.1:9/").unwrap();
    });

    let resp = get_token(State(state), Method::GET, HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}
