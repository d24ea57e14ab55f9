use serde_json::Value;

use super::{FieldError, Location, value};

/// A single predicate applied to a field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present and not `null`/`""`
    NotEmpty,
    /// A number, or a string holding one
    Numeric,
    /// Reads as a number strictly greater than zero
    Positive,
    /// Reads as a boolean
    Boolean,
}

impl Check {
    pub fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::NotEmpty => !value::is_empty(value),
            Check::Numeric => value::is_numeric(value),
            Check::Positive => value::as_number(value).is_some_and(|n| n > 0.0),
            Check::Boolean => value::as_bool(value).is_some(),
        }
    }
}

/// A check paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// The ordered rules for one request field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub path: &'static str,
    pub location: Location,
    /// Skip every rule when the field is absent
    pub optional: bool,
    pub rules: &'static [Rule],
}

impl Field {
    pub const fn body(path: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            path,
            location: Location::Body,
            optional: false,
            rules,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }
}

/// Evaluates every rule of every field in declaration order and returns one
/// [`FieldError`] per failed rule. Evaluation never stops at the first failure.
pub fn evaluate<'a>(
    fields: &[Field],
    lookup: impl Fn(&str) -> Option<&'a Value>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in fields {
        let raw = lookup(field.path);
        if field.optional && raw.is_none() {
            continue;
        }

        for rule in field.rules {
            if !rule.check.passes(raw) {
                errors.push(FieldError::new(
                    field.location,
                    field.path,
                    rule.message,
                    raw.cloned(),
                ));
            }
        }
    }

    errors
}
