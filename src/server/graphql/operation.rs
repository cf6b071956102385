use serde::Serialize;

/// Query listing every tour in the catalogue.
pub const GET_TOURS: &str = r#"
    query GetTours {
        getTours {
            id
            title
            description
            startDate
            endDate
            price
            rating
            createdAt
            updatedAt
            location
            imageUrl
            isActive
            maxParticipants
        }
    }
"#;

/// Mutation creating a tour record.
pub const CREATE_TOUR: &str = r#"
    mutation CreateTour(
        $title: String!
        $description: String
        $start_date: String
        $end_date: String
        $price: Float
        $rating: Float
        $location: String
        $image_url: String
        $is_active: Boolean!
        $max_participants: Int
    ) {
        createTour(
            title: $title
            description: $description
            start_date: $start_date
            end_date: $end_date
            price: $price
            rating: $rating
            location: $location
            image_url: $image_url
            is_active: $is_active
            max_participants: $max_participants
        ) {
            id
            title
            created_at
            updated_at
        }
    }
"#;

/// A GraphQL operation, serialized as the request body sent to the endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_name: &'static str,
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl Operation {
    /// Create an operation without variables.
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            operation_name,
            query,
            variables: None,
        }
    }

    /// Attach variables to the operation.
    ///
    /// # Returns
    /// - `Ok(Operation)` - Operation carrying the serialized variables
    /// - `Err(serde_json::Error)` - `variables` could not be serialized to JSON
    pub fn with_variables<V: Serialize>(
        mut self,
        variables: &V,
    ) -> Result<Self, serde_json::Error> {
        self.variables = Some(serde_json::to_value(variables)?);

        Ok(self)
    }

    pub fn get_tours() -> Self {
        Self::new("GetTours", GET_TOURS)
    }

    pub fn create_tour() -> Self {
        Self::new("CreateTour", CREATE_TOUR)
    }
}
