//! Client-facing error messages shared across services.

pub const INVALID_ID: &str = "ID no válido";
pub const INVALID_JSON: &str = "JSON no válido";
pub const INVALID_BODY: &str = "No se pudo leer el cuerpo de la petición";
pub const CORS_REJECTED: &str = "No permitido por CORS";
pub const ROUTE_NOT_FOUND: &str = "Recurso no encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";
