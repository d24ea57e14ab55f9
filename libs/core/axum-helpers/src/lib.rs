//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with Swagger UI, health checks, graceful shutdown
//! - **[`http`]**: Single-origin CORS enforcement
//! - **[`errors`]**: `AppError` and the `{ "error" }` / `{ "errors" }` response bodies
//! - **[`validation`]**: Ordered field rules over loosely-typed JSON
//! - **[`extractors`]**: Integer id path and rule-validated JSON body extractors
//! - **[`response`]**: `{ "data" }` success envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new(), &CorsConfig::new("http://localhost:5173")).await?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;
pub mod validation;

pub use errors::{AppError, ErrorCode, ErrorResponse, ValidationErrorResponse};
pub use extractors::{IdPath, ValidatedJson, ValidationRejection};
pub use http::{allowed_origin, create_cors_layer, enforce_origin};
pub use response::DataResponse;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
pub use validation::{FieldError, Location, RuleSet};
