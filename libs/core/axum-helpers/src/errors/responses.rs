//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Datos de entrada no válidos",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "",
            "msg": "El nombre de Producto no puede ir vacio",
            "path": "name",
            "location": "body"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "ID no válido",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "not-valid",
            "msg": "ID no válido",
            "path": "id",
            "location": "params"
        }]
    })
)]
pub struct BadRequestIdResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Producto no encontrado",
    content_type = "application/json",
    example = json!({ "error": "Producto No Encontrado" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Origen no permitido",
    content_type = "application/json",
    example = json!({ "error": "No permitido por CORS" })
)]
pub struct ForbiddenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Error interno del servidor",
    content_type = "application/json",
    example = json!({ "error": "Error interno del servidor" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
