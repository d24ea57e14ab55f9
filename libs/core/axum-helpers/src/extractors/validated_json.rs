//! JSON extractor that applies a [`RuleSet`] to the raw payload.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use super::ValidationRejection;
use crate::errors::messages;
use crate::validation::{FieldError, Location, RuleSet};

/// JSON extractor with rule-based validation.
///
/// - A request without a JSON content type, or with a blank body, is read
///   as `T::default()` so every required field reports as empty.
/// - A JSON body that does not parse into `T` rejects with "JSON no válido".
/// - Otherwise every rule of `T::RULES` is evaluated and all violations are
///   returned together.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProductPayload>) -> Response {
///     let input = payload.into_create();
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Default + RuleSet,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(&req);

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            body_error(messages::INVALID_BODY)
        })?;

        let payload = if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            T::default()
        } else {
            serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!("Invalid JSON body: {}", e);
                body_error(messages::INVALID_JSON)
            })?
        };

        let violations = payload.violations();
        if violations.is_empty() {
            Ok(ValidatedJson(payload))
        } else {
            Err(ValidationRejection(violations))
        }
    }
}

fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

fn body_error(msg: &str) -> ValidationRejection {
    ValidationRejection(vec![FieldError::new(Location::Body, "", msg, None)])
}
