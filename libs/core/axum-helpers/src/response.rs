//! Success envelope shared by every API route.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "data": ... }` wrapper for successful responses.
///
/// Pair it with a status code for anything other than 200:
///
/// ```ignore
/// (StatusCode::CREATED, DataResponse::new(product))
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_wraps_payload_in_data() {
        let response = DataResponse::new("Producto Eliminado").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"data":"Producto Eliminado"}"#);
    }
}
