//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{routing::any, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `ANY /api/get-token` - Forward the request to the backend origin
/// - `GET /api/tours` - List tours from the GraphQL catalogue
/// - `GET /api/auth/signin/{provider}` - Begin signing in with Google or GitHub
/// - `GET /api/auth/callback/{provider}` - OAuth2 callback, issues the session cookie
/// - `GET /api/auth/signout` - Clear the session cookie
/// - `GET /api/auth/session` - Current session
///
/// The proxy accepts every method, so it is registered on the plain router and documented
/// through the `ApiDoc` paths rather than through `routes!`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
///
/// # Example
/// ```ignore
/// let state = startup::build_app_state(config)?;
/// let router = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Tourbook", description = "Tourbook API"),
        paths(controller::proxy::get_token),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::proxy::PROXY_TAG, description = "Backend proxy routes"),
            (name = controller::tour::TOUR_TAG, description = "Tour catalogue routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::tour::get_tours))
        .routes(routes!(controller::auth::signin))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::signout))
        .routes(routes!(controller::auth::get_session))
        .split_for_parts();

    routes
        .route("/api/get-token", any(controller::proxy::get_token))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
