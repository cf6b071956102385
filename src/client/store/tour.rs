use chrono::NaiveDate;

use crate::model::tour::{TourDto, TOURS_ERROR_MESSAGE};

/// State of the tour list on the home page.
#[derive(Clone, Debug, PartialEq)]
pub struct TourListState {
    pub tours: Vec<TourDto>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for TourListState {
    fn default() -> Self {
        Self {
            tours: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl TourListState {
    /// Apply the outcome of the tour fetch. Loading ends either way.
    ///
    /// Failures are shown with a generic message; the detailed error is only logged.
    pub fn resolve(&mut self, result: Result<Vec<TourDto>, String>) {
        match result {
            Ok(tours) => {
                self.tours = tours;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(TOURS_ERROR_MESSAGE.to_string());
            }
        }

        self.loading = false;
    }
}

/// Search bar criteria applied to the loaded tours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourFilter {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TourFilter {
    /// Parse a date input value (`YYYY-MM-DD`); an empty or partial value clears the bound.
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }

    pub fn is_empty(&self) -> bool {
        self.destination.trim().is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `tour` satisfies every criterion.
    ///
    /// Destination matches the location or title, ignoring case. Date bounds only exclude tours
    /// that have the compared date.
    pub fn matches(&self, tour: &TourDto) -> bool {
        let destination = self.destination.trim().to_lowercase();
        if !destination.is_empty() {
            let in_location = tour
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&destination));
            let in_title = tour.title.to_lowercase().contains(&destination);

            if !in_location && !in_title {
                return false;
            }
        }

        if let (Some(from), Some(start)) = (self.start_date, tour.start_date) {
            if start < from {
                return false;
            }
        }

        if let (Some(until), Some(end)) = (self.end_date, tour.end_date) {
            if end > until {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, tours: &'a [TourDto]) -> Vec<&'a TourDto> {
        tours.iter().filter(|tour| self.matches(tour)).collect()
    }
}
