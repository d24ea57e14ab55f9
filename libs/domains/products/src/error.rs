use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldError, ValidationRejection};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Message returned for every by-id operation on a missing product.
pub const PRODUCT_NOT_FOUND: &str = "Producto No Encontrado";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        ProductError::Validation(FieldError::from_validation_errors(&errors))
    }
}

impl From<ValidationRejection> for ProductError {
    fn from(rejection: ValidationRejection) -> Self {
        ProductError::Validation(rejection.0)
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
