//! Backend origin HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::fixtures::backend::BackendFixtures;

/// Header the mock backend attaches to every response so relays can be recognised.
pub static BACKEND_MARKER_HEADER: &str = "x-backend-marker";

impl<'a> BackendFixtures<'a> {
    /// Create a mock endpoint at the backend origin root.
    ///
    /// # Arguments
    /// - `method` - HTTP method the endpoint answers
    /// - `status` - Status code to respond with
    /// - `body` - Response body text
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_root_endpoint(
        &mut self,
        method: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock(method, "/")
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_header(BACKEND_MARKER_HEADER, "tour-backend")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
