pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::{FieldError, Location};

/// Body of every non-validation error response.
///
/// ```json
/// { "error": "Producto No Encontrado" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a 400 response: one entry per failed rule.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side failures are logged with their cause and answered with a
/// generic message so internals never reach the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Code logged with the response.
    ///
    /// A rejection that only concerns the path id logs `InvalidId`; an
    /// unparseable body logs `InvalidJson`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Validation(errors) => {
                if errors.iter().any(|e| e.msg == messages::INVALID_JSON) {
                    ErrorCode::InvalidJson
                } else if !errors.is_empty()
                    && errors.iter().all(|e| e.location == Location::Params)
                {
                    ErrorCode::InvalidId
                } else {
                    ErrorCode::ValidationError
                }
            }
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_code = self.error_code().code();

        let message = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code,
                    count = errors.len(),
                    "Validation error: {:?}",
                    errors
                );
                return (status, Json(ValidationErrorResponse { errors })).into_response();
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code,
                    "Not found: {}",
                    msg
                );
                msg
            }
            AppError::Forbidden(msg) => {
                tracing::warn!(
                    error_code,
                    "Forbidden: {}",
                    msg
                );
                msg
            }
            AppError::Database(e) => {
                tracing::error!(
                    error_code,
                    "Database error: {:?}",
                    e
                );
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code,
                    "Internal server error: {}",
                    msg
                );
                messages::INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
