#[cfg(feature = "web")]
use crate::model::session::SessionDto;

/// Retrieve the current session from the API, `None` when signed out
#[cfg(feature = "web")]
pub async fn get_session() -> Result<Option<SessionDto>, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/auth/session")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let session = response
                .json::<SessionDto>()
                .await
                .map_err(|e| format!("Failed to parse session data: {}", e))?;
            Ok(Some(session))
        }
        404 => Ok(None),
        status => Err(format!("Request failed with status {}", status)),
    }
}
