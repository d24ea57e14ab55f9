//! Integer id path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde_json::Value;

use super::ValidationRejection;
use crate::errors::messages;
use crate::validation::{FieldError, Location, value::as_positive_id};

/// Extractor for a positive `i32` `{id}` path segment.
///
/// Anything else (`0`, negatives, non-digits, overflow) rejects with
/// "ID no válido" located at `params.id`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(e) => {
                tracing::debug!("Path extraction failed: {}", e);
                return Err(invalid_id(None));
            }
        };

        as_positive_id(&raw)
            .map(IdPath)
            .ok_or_else(|| invalid_id(Some(Value::String(raw))))
    }
}

fn invalid_id(value: Option<Value>) -> ValidationRejection {
    ValidationRejection(vec![FieldError::new(
        Location::Params,
        "id",
        messages::INVALID_ID,
        value,
    )])
}
