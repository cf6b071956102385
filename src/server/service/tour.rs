use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    model::tour::{CreateTourInput, CreatedTourDto, TourDto},
    server::{
        error::graphql::GraphqlError,
        graphql::{GraphqlClient, Operation},
    },
};

#[derive(Debug, Deserialize)]
pub struct GetToursData {
    #[serde(rename = "getTours")]
    pub get_tours: Vec<TourDto>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTourData {
    #[serde(rename = "createTour")]
    pub create_tour: CreatedTourDto,
}

/// Tour catalogue operations against the GraphQL backend.
pub struct TourService<'a> {
    graphql: &'a GraphqlClient,
}

impl<'a> TourService<'a> {
    pub fn new(graphql: &'a GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Fetch every tour in the catalogue.
    ///
    /// The list is returned exactly as the backend ordered it. Failures are logged and handed
    /// back to the caller.
    pub async fn fetch_tours(&self) -> Result<Vec<TourDto>, GraphqlError> {
        match self
            .graphql
            .execute::<GetToursData>(&Operation::get_tours())
            .await
        {
            Ok(data) => Ok(data.get_tours),
            Err(e) => {
                tracing::error!("Error fetching tours: {}", e);
                Err(e)
            }
        }
    }

    /// Create a tour and return the stored record's id, title and timestamps.
    pub async fn create_tour(
        &self,
        input: &CreateTourInput,
    ) -> Result<CreatedTourDto, GraphqlError> {
        let operation = Operation::create_tour().with_variables(input)?;

        let data = self.graphql.execute::<CreateTourData>(&operation).await?;

        tracing::debug!(id = %data.create_tour.id, "Created tour");

        Ok(data.create_tour)
    }
}
