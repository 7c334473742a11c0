//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::sum_handler;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Axum Starter
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Axum Starter",
        version = "0.1.0",
        description = "A minimal Axum API starter with environment-driven configuration",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        sum_handler::sum,
    ),
    components(
        schemas(
            sum_handler::SumRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "Sum", description = "Integer addition")
    )
)]
pub struct ApiDoc;
