//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`ValidationRejection`], which renders as a
//! 400 `{ "errors": [...] }` body. Handlers that must report path and body
//! problems together take `Result<_, ValidationRejection>` for each and merge
//! them with [`ValidationRejection::combine`].

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;

use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::validation::FieldError;

/// Rejection carrying every field violation found while extracting.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRejection(pub Vec<FieldError>);

impl ValidationRejection {
    /// Merges two extraction results, keeping all violations in order.
    pub fn combine<A, B>(a: Result<A, Self>, b: Result<B, Self>) -> Result<(A, B), Self> {
        match (a, b) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
            (Err(Self(mut first)), Err(Self(second))) => {
                first.extend(second);
                Err(Self(first))
            }
        }
    }
}

impl From<ValidationRejection> for AppError {
    fn from(rejection: ValidationRejection) -> Self {
        AppError::Validation(rejection.0)
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
