#![warn(missing_docs)]

//! Pantry RESTful API
//!
//! Exposes the food collection over HTTP: create/read/update/delete
//! under `/api/food`, a health endpoint, and a Swagger UI for the
//! OpenAPI document. All resource logic lives in `pantry-core`; this
//! crate only maps HTTP to store operations and errors to status
//! codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use server::ApiServer;
pub use state::AppState;
