//! HTTP middleware.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, enforce_origin};
//!
//! let app = Router::new()
//!     .layer(create_cors_layer(origin.clone()))
//!     .layer(axum::middleware::from_fn_with_state(origin, enforce_origin));
//! ```

pub mod cors;

pub use cors::{allowed_origin, create_cors_layer, enforce_origin};
