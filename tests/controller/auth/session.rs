use super::*;
use axum::{
    extract::State,
    http::{header::COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use tourbook::{model::session::SessionDto, server::controller::auth::get_session};
use tourbook_test_utils::constant::TEST_NEXTAUTH_SECRET;

fn cookie_headers(claims: &serde_json::Value) -> Result<HeaderMap, TestError> {
    let token = auth_factory::encode_session_token(TEST_NEXTAUTH_SECRET, claims)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("next-auth.session-token={}", token)).unwrap(),
    );

    Ok(headers)
}

#[tokio::test]
/// Tests that a valid session token is returned as the current session
///
/// Expected: 200 with name, email and image from the token
async fn returns_current_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let claims = auth_factory::mock_session_claims("Ada Lovelace");
    let headers = cookie_headers(&claims)?;

    let resp = get_session(State(test.state()), headers)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let session: SessionDto = serde_json::from_str(&body_text(resp).await)?;
    assert_eq!(session.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(session.image.as_deref(), claims["picture"].as_str());
    assert_eq!(session.expires.timestamp(), claims["exp"].as_i64().unwrap());

    Ok(())
}

#[tokio::test]
/// Tests the response when no session cookie is sent
///
/// Expected: 404
async fn fails_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_session(State(test.state()), HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Tests that an expired token does not count as a session
///
/// Expected: 404
async fn fails_for_expired_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let headers = cookie_headers(&auth_factory::mock_expired_session_claims("Ada Lovelace"))?;

    let resp = get_session(State(test.state()), headers)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
