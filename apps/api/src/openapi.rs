//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products REST API",
        version = "0.1.0",
        description = "API Docs for Products"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
