//! Payload validation for create and update requests

use serde_json::{Map, Number, Value};

use crate::error::ValidationError;

/// The admissible portion of a payload, extracted by [`validate_payload`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFood {
    /// Non-empty name
    pub name: String,
    /// Non-negative caloric value
    pub calories: Number,
}

/// Check a candidate payload against the admission rules
///
/// Rules, in order: `name` is present and a non-empty string,
/// `calories` is present and numeric, `calories` is not negative.
/// Pure and deterministic; extra fields in the payload are ignored.
pub fn validate_payload(payload: &Map<String, Value>) -> Result<ValidFood, ValidationError> {
    let name = match payload.get("name") {
        None => return Err(ValidationError::MissingName),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(_) => return Err(ValidationError::InvalidName),
    };

    let calories = match payload.get("calories") {
        None => return Err(ValidationError::MissingCalories),
        Some(Value::Number(n)) => n.clone(),
        Some(_) => return Err(ValidationError::InvalidCalories),
    };

    if calories.as_f64().is_some_and(|v| v < 0.0) {
        return Err(ValidationError::NegativeCalories);
    }

    Ok(ValidFood { name, calories })
}
