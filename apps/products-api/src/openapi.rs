//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation served at `/docs`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum / SeaORM",
        version = "1.0.0",
        description = "Api Docs for Products"
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
