//! Declarative request validation.
//!
//! A request payload keeps its fields as raw JSON, declares an ordered list
//! of [`Field`] rules and exposes its raw values through [`RuleSet::value`].
//! Evaluation produces one [`FieldError`] per failed rule, serialized as
//!
//! ```json
//! { "type": "field", "value": 0, "msg": "Precio no válido", "path": "price", "location": "body" }
//! ```

pub mod rules;
pub mod value;

pub use rules::{Check, Field, Rule, evaluate};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Where the offending value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(
        location: Location,
        path: impl Into<String>,
        msg: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }

    /// Converts `validator` derive errors, ordered by field name.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        fields
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::new(
                        Location::Body,
                        field.to_string(),
                        msg,
                        err.params.get("value").cloned(),
                    )
                })
            })
            .collect()
    }
}

/// A request payload validated by an ordered list of field rules.
pub trait RuleSet {
    const RULES: &'static [Field];

    /// Raw value of the field at `path`, `None` when absent.
    fn value(&self, path: &str) -> Option<&Value>;

    fn violations(&self) -> Vec<FieldError> {
        evaluate(Self::RULES, |path| self.value(path))
    }
}
