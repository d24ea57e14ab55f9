//! Request payloads as received over HTTP and the rules they must pass.
//!
//! Fields stay raw JSON until every rule has run so that a single request
//! reports all of its problems at once, then convert into the typed inputs.

use axum_helpers::validation::{Check, Field, Rule, RuleSet, value};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{CreateProduct, UpdateProduct};

pub const NAME_REQUIRED: &str = "El nombre de Producto no puede ir vacio";
pub const INVALID_VALUE: &str = "Valor no válido";
pub const PRICE_REQUIRED: &str = "El precio de Producto no puede ir vacio";
pub const INVALID_PRICE: &str = "Precio no válido";
pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";

const NAME_RULES: &[Rule] = &[Rule::new(Check::NotEmpty, NAME_REQUIRED)];

const PRICE_RULES: &[Rule] = &[
    Rule::new(Check::Numeric, INVALID_VALUE),
    Rule::new(Check::NotEmpty, PRICE_REQUIRED),
    Rule::new(Check::Positive, INVALID_PRICE),
];

const AVAILABILITY_RULES: &[Rule] = &[Rule::new(Check::Boolean, INVALID_AVAILABILITY)];

/// Body of `POST /api/products`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CreateProductPayload {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub availability: Option<Value>,
}

impl RuleSet for CreateProductPayload {
    const RULES: &'static [Field] = &[
        Field::body("name", NAME_RULES),
        Field::body("price", PRICE_RULES),
        Field::body("availability", AVAILABILITY_RULES).optional(),
    ];

    fn value(&self, path: &str) -> Option<&Value> {
        match path {
            "name" => self.name.as_ref(),
            "price" => self.price.as_ref(),
            "availability" => self.availability.as_ref(),
            _ => None,
        }
    }
}

impl CreateProductPayload {
    pub fn into_create(self) -> CreateProduct {
        CreateProduct {
            name: value::as_text(self.name.as_ref()),
            price: value::as_number(self.price.as_ref()).unwrap_or_default(),
            availability: value::as_bool(self.availability.as_ref()).unwrap_or(true),
        }
    }
}

/// Body of `PUT /api/products/{id}`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct UpdateProductPayload {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub availability: Option<Value>,
}

impl RuleSet for UpdateProductPayload {
    const RULES: &'static [Field] = &[
        Field::body("name", NAME_RULES),
        Field::body("price", PRICE_RULES),
        Field::body("availability", AVAILABILITY_RULES),
    ];

    fn value(&self, path: &str) -> Option<&Value> {
        match path {
            "name" => self.name.as_ref(),
            "price" => self.price.as_ref(),
            "availability" => self.availability.as_ref(),
            _ => None,
        }
    }
}

impl UpdateProductPayload {
    pub fn into_update(self) -> UpdateProduct {
        UpdateProduct {
            name: value::as_text(self.name.as_ref()),
            price: value::as_number(self.price.as_ref()).unwrap_or_default(),
            availability: value::as_bool(self.availability.as_ref()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: Value) -> CreateProductPayload {
        serde_json::from_value(body).unwrap()
    }

    fn update(body: Value) -> UpdateProductPayload {
        serde_json::from_value(body).unwrap()
    }

    fn messages<R: RuleSet>(payload: &R) -> Vec<String> {
        payload.violations().into_iter().map(|e| e.msg).collect()
    }

    #[test]
    fn test_create_empty_body_reports_four_errors() {
        assert_eq!(
            messages(&CreateProductPayload::default()),
            [NAME_REQUIRED, INVALID_VALUE, PRICE_REQUIRED, INVALID_PRICE]
        );
    }

    #[test]
    fn test_create_zero_price_reports_one_error() {
        let payload = create(json!({ "name": "Monitor Curvo", "price": 0 }));
        let errors = payload.violations();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, INVALID_PRICE);
        assert_eq!(errors[0].path, "price");
        assert_eq!(errors[0].value, Some(json!(0)));
    }

    #[test]
    fn test_create_non_numeric_price() {
        let payload = create(json!({ "name": "Monitor", "price": "Hola" }));
        assert_eq!(messages(&payload), [INVALID_VALUE, INVALID_PRICE]);
    }

    #[test]
    fn test_create_availability_checked_only_when_present() {
        let absent = create(json!({ "name": "Monitor", "price": 50 }));
        assert!(absent.violations().is_empty());

        let invalid = create(json!({ "name": "Monitor", "price": 50, "availability": "sí" }));
        assert_eq!(messages(&invalid), [INVALID_AVAILABILITY]);
    }

    #[test]
    fn test_create_conversion_reads_loose_values() {
        let input = create(json!({ "name": "Monitor", "price": "49.90" })).into_create();
        assert_eq!(input, CreateProduct::new("Monitor", 49.90));

        let input =
            create(json!({ "name": "Monitor", "price": 10, "availability": "false" })).into_create();
        assert!(!input.availability);
    }

    #[test]
    fn test_update_empty_body_reports_five_errors() {
        assert_eq!(
            messages(&UpdateProductPayload::default()),
            [
                NAME_REQUIRED,
                INVALID_VALUE,
                PRICE_REQUIRED,
                INVALID_PRICE,
                INVALID_AVAILABILITY
            ]
        );
    }

    #[test]
    fn test_update_invalid_price_only() {
        let payload = update(json!({ "name": "Monitor", "price": -10, "availability": true }));
        assert_eq!(messages(&payload), [INVALID_PRICE]);
    }

    #[test]
    fn test_update_conversion() {
        let input =
            update(json!({ "name": "Monitor", "price": 300, "availability": 0 })).into_update();
        assert_eq!(
            input,
            UpdateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
                availability: false,
            }
        );
    }
}
