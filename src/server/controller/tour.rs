use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, tour::TourDto},
    server::{error::Error, model::app::AppState, service::tour::TourService},
};

pub static TOUR_TAG: &str = "tour";

/// Get every tour in the catalogue
///
/// Runs the `GetTours` query against the GraphQL backend and returns the list unmodified.
///
/// # Responses
/// - 200 (OK): The tours, possibly empty
/// - 502 (Bad Gateway): The query failed; details are logged, the body carries a generic message
#[utoipa::path(
    get,
    path = "/api/tours",
    tag = TOUR_TAG,
    responses(
        (status = 200, description = "Success when retrieving tours", body = Vec<TourDto>),
        (status = 502, description = "Failed to load tours", body = ErrorDto)
    ),
)]
pub async fn get_tours(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tours = TourService::new(&state.graphql).fetch_tours().await?;

    Ok((StatusCode::OK, Json(tours)))
}
