//! Tests for the assembled router: route registration and the OpenAPI document.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;
use tourbook::server::router::routes;
use tourbook_test_utils::prelude::*;

use crate::util::TestContextExt;

#[tokio::test]
/// Tests that the proxy route accepts methods other than GET
///
/// Expected: POST forwarded to the backend as POST
async fn proxy_route_accepts_any_method() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_backend_endpoint("POST", 201, "created", 1)
        .build()
        .await?;
    let app = routes().with_state(test.state());

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/get-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that the tour list is reachable through the router
async fn serves_tours() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tours_endpoint(factory::mock_tours(1), 1)
        .build()
        .await?;
    let app = routes().with_state(test.state());

    let resp = app
        .oneshot(Request::get("/api/tours").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that every endpoint appears in the OpenAPI document
async fn documents_all_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.state());

    let resp = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes)?;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/get-token",
        "/api/tours",
        "/api/auth/signin/{provider}",
        "/api/auth/callback/{provider}",
        "/api/auth/signout",
        "/api/auth/session",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    for method in ["get", "post", "put", "delete", "patch", "head", "options"] {
        assert!(
            paths["/api/get-token"].get(method).is_some(),
            "proxy missing {}",
            method
        );
    }

    Ok(())
}
