//! GraphQL HTTP mock endpoint creation utilities.
//!
//! Every endpoint is registered on `POST /graphql` and told apart by the operation name found in
//! the request body, so a single test may mock both the query and the mutation.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::GRAPHQL_PATH, fixtures::tour::TourFixtures};

impl<'a> TourFixtures<'a> {
    /// Create a mock `GetTours` endpoint returning the provided records.
    ///
    /// # Arguments
    /// - `tours` - Tour records to place under `data.getTours`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_tours_endpoint(&mut self, tours: Vec<Value>, expected_requests: usize) -> Mock {
        let body = json!({ "data": { "getTours": tours } });

        self.context
            .server
            .mock("POST", GRAPHQL_PATH)
            .match_body(Matcher::Regex("GetTours".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GetTours` endpoint answering with a GraphQL error entry.
    ///
    /// The response is a 200 carrying `data: null` and one error with a message, location and
    /// path, as a GraphQL server reports resolver failures.
    pub fn create_tours_error_endpoint(&mut self, message: &str, expected_requests: usize) -> Mock {
        let body = json!({
            "data": null,
            "errors": [{
                "message": message,
                "locations": [{ "line": 2, "column": 9 }],
                "path": ["getTours"]
            }]
        });

        self.context
            .server
            .mock("POST", GRAPHQL_PATH)
            .match_body(Matcher::Regex("GetTours".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GraphQL endpoint failing with a bare HTTP status and plain text body.
    pub fn create_graphql_status_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", GRAPHQL_PATH)
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_body("upstream unavailable")
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `CreateTour` endpoint returning the provided record.
    pub fn create_tour_mutation_endpoint(
        &mut self,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({ "data": { "createTour": created } });

        self.context
            .server
            .mock("POST", GRAPHQL_PATH)
            .match_body(Matcher::Regex("CreateTour".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
