use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field and bumps `updated_at`.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
        self.updated_at = Utc::now();
    }
}

fn default_availability() -> bool {
    true
}

/// Input for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "El nombre de Producto no puede ir vacio"))]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, max = f64::MAX, message = "Precio no válido"))]
    #[schema(example = 399.0)]
    pub price: f64,
    /// Defaults to `true` when omitted
    #[serde(default = "default_availability")]
    #[schema(example = true)]
    pub availability: bool,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            availability: true,
        }
    }
}

/// Input for replacing a product's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "El nombre de Producto no puede ir vacio"))]
    #[schema(example = "Monitor Curvo")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, max = f64::MAX, message = "Precio no válido"))]
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}
