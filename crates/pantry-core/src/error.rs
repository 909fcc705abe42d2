//! Error types for validation and store operations

use thiserror::Error;

/// Why a candidate payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` field is absent
    #[error("name is required")]
    MissingName,

    /// `name` field is present but not a non-empty string
    #[error("name must be a non-empty string")]
    InvalidName,

    /// `calories` field is absent
    #[error("calories is required")]
    MissingCalories,

    /// `calories` field is present but not a number
    #[error("calories must be a number")]
    InvalidCalories,

    /// `calories` is numeric but below zero
    #[error("calories must not be negative")]
    NegativeCalories,
}

/// Store operation error
///
/// All variants are routine client-facing outcomes; the transport
/// layer maps them deterministically to HTTP status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodError {
    /// Payload failed validation
    #[error("invalid food payload: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No entity with the addressed id
    #[error("no food with id {0}")]
    NotFound(String),

    /// Update payload carried an id that differs from the path id
    #[error("payload id {actual} does not match addressed id {expected}")]
    IdentityMismatch {
        /// The id the request addressed
        expected: String,
        /// The id the payload carried
        actual: String,
    },
}

/// Result type alias for store operations
pub type FoodResult<T> = Result<T, FoodError>;
