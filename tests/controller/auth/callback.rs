use super::*;
use axum::{
    extract::{Path, Query, State},
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
};
use serde_json::json;
use tourbook::server::controller::auth::{callback, CallbackParams};
use tourbook_test_utils::constant::TEST_NEXTAUTH_SECRET;

fn state_cookie(state: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("next-auth.state={}", state)).unwrap(),
    );
    headers
}

fn params(state: &str) -> Query<CallbackParams> {
    Query(CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    })
}

#[tokio::test]
/// Tests a successful GitHub sign-in
///
/// Expected: 307 to `/` with a session cookie holding the profile and the state cookie cleared
async fn issues_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_github_endpoints(json!({
            "id": 99,
            "login": "wanderer",
            "name": "Wanda Wanderer",
            "email": "wanda@example.com",
            "avatar_url": "https://avatars.example.com/u/99"
        }))
        .build()
        .await?;

    let resp = callback(
        State(test.state()),
        Path("github".to_string()),
        state_cookie("state"),
        params("state"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");

    let cookies: Vec<&str> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(cookies.len(), 2);

    let session = cookies
        .iter()
        .find_map(|c| c.strip_prefix("next-auth.session-token="))
        .unwrap();
    let token = session.split(';').next().unwrap();
    let claims = auth_factory::decode_session_token(TEST_NEXTAUTH_SECRET, token)?;
    assert_eq!(claims["name"], "Wanda Wanderer");
    assert_eq!(claims["sub"], "99");
    assert_eq!(claims["picture"], "https://avatars.example.com/u/99");

    assert!(cookies
        .iter()
        .any(|c| c.starts_with("next-auth.state=;") && c.contains("Max-Age=0")));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests a successful Google sign-in, where the account id and picture come from OpenID claims
///
/// Expected: 307 to `/` with a session cookie holding `sub` and `picture` from the userinfo
async fn issues_session_cookie_for_google() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_google_endpoints(json!({
            "sub": "110169484474386276334",
            "name": "Gina Globetrotter",
            "email": "gina@example.com",
            "picture": "https://lh3.googleusercontent.com/a/gina.jpg"
        }))
        .build()
        .await?;

    let resp = callback(
        State(test.state()),
        Path("google".to_string()),
        state_cookie("state"),
        params("state"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");

    let token = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .find_map(|c| c.strip_prefix("next-auth.session-token="))
        .and_then(|c| c.split(';').next())
        .unwrap();
    let claims = auth_factory::decode_session_token(TEST_NEXTAUTH_SECRET, token)?;
    assert_eq!(claims["sub"], "110169484474386276334");
    assert_eq!(claims["email"], "gina@example.com");
    assert_eq!(claims["picture"], "https://lh3.googleusercontent.com/a/gina.jpg");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that a state mismatch is rejected before contacting the provider
///
/// Expected: 400
async fn fails_for_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = callback(
        State(test.state()),
        Path("github".to_string()),
        state_cookie("expected"),
        params("forged"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Tests that a callback without the state cookie is rejected
///
/// Expected: 400
async fn fails_without_state_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = callback(
        State(test.state()),
        Path("google".to_string()),
        HeaderMap::new(),
        params("state"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Tests that a provider rejecting the code is reported as a bad gateway
///
/// Expected: 502
async fn fails_when_provider_rejects_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/token")
                .with_status(401)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"invalid_grant"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let resp = callback(
        State(test.state()),
        Path("google".to_string()),
        state_cookie("state"),
        params("state"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = callback(
        State(test.state()),
        Path("myspace".to_string()),
        state_cookie("state"),
        params("state"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
