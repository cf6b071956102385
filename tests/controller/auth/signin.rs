use super::*;
use axum::{
    extract::{Path, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        StatusCode,
    },
    response::IntoResponse,
};
use reqwest::Url;
use tourbook::server::controller::auth::signin;

#[tokio::test]
/// Tests the redirect to the provider with the state stored in a cookie
///
/// Expected: 307 to the GitHub authorize URL, state cookie matching the URL's state
async fn redirects_to_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (authorize_url, _, _) = test.github_endpoints();

    let resp = signin(State(test.state()), Path("github".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(location.starts_with(&authorize_url));

    let state = Url::parse(location)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    let cookie = resp.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with(&format!("next-auth.state={};", state)));
    assert!(cookie.contains("HttpOnly"));

    Ok(())
}

#[tokio::test]
/// Tests that the state cookie is prefixed when the site is served over https
async fn uses_secure_state_cookie_over_https() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_env("NEXTAUTH_URL", "https://tours.example.com")
        .build()
        .await?;

    let resp = signin(State(test.state()), Path("google".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let cookie = resp.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("__Secure-next-auth.state="));
    assert!(cookie.contains("; Secure"));

    Ok(())
}

#[tokio::test]
/// Tests that an unsupported provider is not found
///
/// Expected: 404
async fn fails_for_unknown_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = signin(State(test.state()), Path("myspace".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
