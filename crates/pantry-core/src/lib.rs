//! Pantry Core
//!
//! This crate owns the food collection: payload validation, identifier
//! assignment, and the in-memory store that backs the HTTP API. The
//! transport layer lives in `pantry-api` and only consumes the types
//! re-exported here.

pub mod error;
pub mod models;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use error::{FoodError, FoodResult, ValidationError};
pub use models::Food;
pub use store::{FoodStore, IdGenerator, RandomIdGenerator};
pub use validate::{validate_payload, ValidFood};
