use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Message shown in place of the tour list whenever loading it fails
pub const TOURS_ERROR_MESSAGE: &str = "Failed to load tours.";

/// A tour as listed by the backend catalogue
///
/// Only `id`, `title` and `is_active` are required; a record missing any of them is rejected
/// when the response is deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub max_participants: Option<i32>,
}

/// Variables of the `CreateTour` mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateTourInput {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub max_participants: Option<i32>,
}

/// The record returned by the `CreateTour` mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatedTourDto {
    pub id: i32,
    pub title: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
