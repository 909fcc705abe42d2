//! Domain model for stored food entities

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored food entity
///
/// The wire representation is exactly `{name, calories, id}`. Calories
/// stay a raw JSON number so that an integer value round-trips as an
/// integer instead of picking up a float suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Opaque identifier assigned by the store at creation time
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Caloric value, never negative
    pub calories: Number,
}

impl Food {
    /// Build a food entity from already-validated fields
    pub fn new(id: String, name: String, calories: Number) -> Self {
        Self { id, name, calories }
    }
}
