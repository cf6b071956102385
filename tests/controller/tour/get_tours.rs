use super::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tourbook::{
    model::{api::ErrorDto, tour::TourDto},
    server::controller::tour::get_tours,
};

#[tokio::test]
/// Tests that every mocked record is returned with its fields intact
///
/// Expected: 200 with 4 tours
async fn returns_tours() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tours_endpoint(factory::mock_tours(4), 1)
        .build()
        .await?;

    let resp = get_tours(State(test.state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let tours: Vec<TourDto> = serde_json::from_str(&body_text(resp).await)?;
    assert_eq!(tours.len(), 4);
    assert_eq!(tours[3].title, "Tour 4");
    assert_eq!(tours[3].max_participants, Some(12));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Tests that an empty catalogue is returned as an empty list
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tours_endpoint(Vec::new(), 1)
        .build()
        .await?;

    let resp = get_tours(State(test.state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "[]");

    Ok(())
}

#[tokio::test]
/// Tests that a GraphQL error becomes the generic error message
///
/// Expected: 502 with "Failed to load tours."
async fn fails_with_generic_message_on_graphql_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tours_error_endpoint("column \"rating\" does not exist", 1)
        .build()
        .await?;

    let resp = get_tours(State(test.state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let error: ErrorDto = serde_json::from_str(&body_text(resp).await)?;
    assert_eq!(error.error, "Failed to load tours.");

    Ok(())
}

#[tokio::test]
/// Tests that an unavailable GraphQL endpoint becomes the generic error message
async fn fails_with_generic_message_on_status_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let _mock = test.tour().create_graphql_status_endpoint(500, 1);

    let resp = get_tours(State(test.state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let error: ErrorDto = serde_json::from_str(&body_text(resp).await)?;
    assert_eq!(error.error, "Failed to load tours.");

    Ok(())
}
