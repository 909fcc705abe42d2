//! API request and response models

use pantry_core::Food;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// Food creation/update request
///
/// Documentation schema only; the handlers accept the raw JSON object
/// and let the core validator produce the per-rule verdict.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodRequest {
    /// Food name, must be non-empty
    pub name: String,
    /// Caloric value, must be non-negative
    pub calories: f64,
    /// Entity id; only meaningful on update, where it must match the
    /// path id if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Food entity response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodResponse {
    /// Food name
    pub name: String,
    /// Caloric value
    #[schema(value_type = f64)]
    pub calories: Number,
    /// Store-assigned id
    pub id: String,
}

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        Self {
            name: food.name,
            calories: food.calories,
            id: food.id,
        }
    }
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Number of stored food entities
    pub foods: usize,
}
