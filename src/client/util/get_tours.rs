#[cfg(feature = "web")]
use crate::model::tour::TourDto;

/// Retrieve the tour catalogue from the API
#[cfg(feature = "web")]
pub async fn get_tours() -> Result<Vec<TourDto>, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/tours")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let tours = response
                .json::<Vec<TourDto>>()
                .await
                .map_err(|e| format!("Failed to parse tour data: {}", e))?;
            Ok(tours)
        }
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_dto.error
                ))
            } else {
                Err(format!("Request failed with status {}", response.status()))
            }
        }
    }
}
