use axum::response::{IntoResponse, Response};

use super::{AppError, messages};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound(messages::ROUTE_NOT_FOUND.to_string()).into_response()
}
