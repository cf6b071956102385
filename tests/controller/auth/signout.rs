use super::*;
use axum::{
    extract::State,
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
};
use tourbook::server::controller::auth::signout;

#[tokio::test]
/// Tests that signing out clears the session cookie and returns home
///
/// Expected: 307 to `/` with a removal cookie
async fn clears_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = signout(State(test.state()), HeaderMap::new())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/");
    let cookie = resp.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("next-auth.session-token=;"));
    assert!(cookie.contains("Max-Age=0"));

    Ok(())
}

#[tokio::test]
/// Tests that every chunk of a chunked session token is cleared
async fn clears_chunked_session_cookies() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_static(
            "next-auth.session-token.0=abc; next-auth.session-token.1=def; theme=dark",
        ),
    );

    let resp = signout(State(test.state()), headers).await.into_response();

    let cleared: Vec<String> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().split('=').next().unwrap().to_string())
        .collect();
    assert_eq!(cleared.len(), 3);
    assert!(cleared.contains(&"next-auth.session-token".to_string()));
    assert!(cleared.contains(&"next-auth.session-token.0".to_string()));
    assert!(cleared.contains(&"next-auth.session-token.1".to_string()));

    Ok(())
}
