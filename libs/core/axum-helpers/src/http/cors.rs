use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::errors::{AppError, messages};

/// Parses the configured frontend URL into the exact `Origin` value browsers send.
///
/// A trailing `/` is dropped since `Origin` never carries a path.
pub fn allowed_origin(config: &CorsConfig) -> io::Result<HeaderValue> {
    let origin = config.frontend_url.trim().trim_end_matches('/');
    HeaderValue::from_str(origin).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid FRONTEND_URL value '{}': {}", origin, e),
        )
    })
}

/// Creates a CORS layer for a single allowed origin.
///
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Rejects requests whose `Origin` differs from the allowed one with 403.
///
/// Requests without an `Origin` header (curl, server-to-server, same-origin
/// navigation) pass through untouched.
pub async fn enforce_origin(
    State(allowed): State<HeaderValue>,
    request: Request,
    next: Next,
) -> Response {
    match request.headers().get(header::ORIGIN) {
        Some(origin) if origin.as_bytes() != allowed.as_bytes() => {
            tracing::warn!(
                origin = ?origin,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected cross-origin request"
            );
            AppError::Forbidden(messages::CORS_REJECTED.to_string()).into_response()
        }
        _ => next.run(request).await,
    }
}
