use serde::{Deserialize, Serialize};

/// Body of every error response from the API
///
/// Messages are generic and meant for display; details stay in the server log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
