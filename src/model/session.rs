use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user's session as exposed to the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SessionDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    /// When the session token stops being accepted
    pub expires: DateTime<Utc>,
}
