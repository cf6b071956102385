use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, tour::TOURS_ERROR_MESSAGE},
    server::graphql::response::GraphqlErrorEntry,
};

#[derive(Error, Debug)]
pub enum GraphqlError {
    /// The request never produced a response (connection refused, DNS, TLS, body read).
    #[error("GraphQL network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-success HTTP status without a GraphQL error body.
    #[error("GraphQL endpoint responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The server reported one or more errors for the operation.
    #[error("GraphQL operation failed: {}", join_messages(.0))]
    Response(Vec<GraphqlErrorEntry>),
    /// The body was not a valid GraphQL response for the expected data shape.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("GraphQL response contained neither data nor errors")]
    MissingData,
}

fn join_messages(errors: &[GraphqlErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every GraphQL failure is a 502 with the generic tour message; the link chain has
/// already logged the details.
impl IntoResponse for GraphqlError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(ErrorDto::new(TOURS_ERROR_MESSAGE))).into_response()
    }
}
