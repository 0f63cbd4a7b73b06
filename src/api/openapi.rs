//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, hotels};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agoda Search Proxy API",
        version = "0.1.0",
        description = "Simplified hotel search over the Agoda GraphQL API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Hotels
        hotels::search,
    ),
    components(
        schemas(
            crate::models::hotel::HotelSearchQuery,
            crate::models::hotel::SearchParams,
            crate::models::hotel::HotelSummary,
            crate::models::hotel::SearchResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hotels", description = "Hotel search")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
