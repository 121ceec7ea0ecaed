//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, gate, model::app::AppState};

/// Builds the application's HTTP router with all route groups, static asset
/// services, and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Log in with username and password
/// - `GET /api/auth/logout` - Destroy the current session
/// - `GET /api/auth/user` - Current session identity (`user` is null when anonymous)
/// - `POST /api/password/forgot` - Start a password reset
/// - `POST /api/password/reset` - Complete a password reset
/// - `GET /api/admin/overview` - Admin landing data (admin role required)
/// - `POST /api/upload` - Multipart upload into the public image directory
/// - `GET /dean/overview` - Dean landing data (dean role required)
/// - `GET /TestImages/*` - Uploaded and pre-seeded images
/// - `GET /*` - Public static assets, `index.html` at the root
///
/// # Route precedence
/// Explicit routes win over the static services. Everything nested under
/// `/dean` stays in the dean section: the group carries its own fallback
/// behind the dean gate, so an unknown `/dean/...` path answers with the
/// gate's verdict (or a dean-section 404) and never falls through to the
/// public assets. Only paths no group claims reach the static fallback.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`, and
/// interactive Swagger UI documentation is served at `/api/docs`.
///
/// # Returns
/// A fully wired `Router` ready to be layered with the session stack and
/// served.
pub fn routes(state: AppState, public_dir: &Path) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Heimdall", description = "Campus portal API"),
        paths(controller::dean::overview),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::password_reset::PASSWORD_TAG, description = "Password reset API routes"),
            (name = controller::admin::ADMIN_TAG, description = "Admin page routes"),
            (name = controller::dean::DEAN_TAG, description = "Dean section routes"),
            (name = controller::upload::UPLOAD_TAG, description = "File upload routes"),
        )
    )]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::password_reset::forgot))
        .routes(routes!(controller::password_reset::reset))
        .routes(routes!(controller::admin::overview))
        .routes(routes!(controller::upload::upload))
        .split_for_parts();

    // The fallback sits inside the gate layer on purpose: unknown dean paths
    // must answer as the dean section.
    let dean_routes = Router::new()
        .route("/overview", get(controller::dean::overview))
        .fallback(controller::dean::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_dean,
        ));

    api_routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest("/dean", dean_routes)
        .nest_service(
            "/TestImages",
            ServeDir::new(public_dir.join("TestImages")),
        )
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
