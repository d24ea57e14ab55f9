use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::cors::{allowed_origin, create_cors_layer, enforce_origin};
use axum::{Router, middleware};
use core_config::cors::CorsConfig;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI.
pub const DOCS_PATH: &str = "/docs";

/// Creates the application router with documentation and cross-cutting layers.
///
/// - Swagger UI at `/docs`, backed by `T::openapi()`
/// - API routes nested under `/api`
/// - `root` routes (health, readiness) merged at the top level
/// - `{ "error": "Recurso no encontrado" }` fallback for unknown routes
/// - Origin enforcement and CORS headers for `FRONTEND_URL`
/// - Request tracing at INFO
///
/// Every route, `root` included, sits under the origin check and tracing.
///
/// # Errors
/// Returns `InvalidInput` when the configured frontend URL is not a valid
/// header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/products", domain_products::handlers::router(service));
/// let root = health_router(app_info!());
/// let router = create_router::<ApiDoc>(api_routes, root, &config.cors).await?;
/// ```
pub async fn create_router<T>(apis: Router, root: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let origin = allowed_origin(cors)?;
    info!("CORS configured with allowed origin: {:?}", origin);

    let router = Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, T::openapi()))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .layer(create_cors_layer(origin.clone()))
        .layer(middleware::from_fn_with_state(origin, enforce_origin))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` within `shutdown_timeout`.
///
/// In-flight requests finish before `cleanup` starts.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     if let Err(e) = db.close().await {
///         tracing::error!("Error closing database: {}", e);
///     }
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signals = coordinator.clone();
    tokio::spawn(async move { signals.listen_for_signals().await });

    let graceful = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { graceful.wait().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API", version = "0.0.1"))]
    struct TestDoc;

    async fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let root = Router::new().route("/health", get(|| async { "ok" }));
        create_router::<TestDoc>(apis, root, &CorsConfig::new("http://localhost:5173"))
            .await
            .unwrap()
    }

    async fn get_uri(uri: &str) -> axum::response::Response {
        router()
            .await
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_nested_under_api() {
        assert_eq!(get_uri("/api/ping").await.status(), StatusCode::OK);
        assert_eq!(get_uri("/ping").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_fallback() {
        let response = get_uri("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Recurso no encontrado");
    }

    #[tokio::test]
    async fn test_docs_served() {
        let response = get_uri(DOCS_PATH).await;
        assert!(
            response.status().is_success() || response.status().is_redirection(),
            "unexpected status {}",
            response.status()
        );

        let response = get_uri("/docs/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .contains("text/html")
        );
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = get_uri(OPENAPI_JSON_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "Test API");
    }

    #[tokio::test]
    async fn test_invalid_frontend_url_fails() {
        let result =
            create_router::<TestDoc>(Router::new(), Router::new(), &CorsConfig::new("http://bad\nurl"))
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_root_routes_are_served() {
        assert_eq!(get_uri("/health").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_routes_reject_foreign_origin() {
        let response = router()
            .await
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
