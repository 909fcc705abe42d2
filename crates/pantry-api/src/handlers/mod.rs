//! API request handlers

pub mod foods;
pub mod health;
