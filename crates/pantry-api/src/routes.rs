//! API route definitions

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{foods, health},
    middleware::logging::logging_middleware,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Food collection
        .route("/api/food", post(foods::create_food))
        .route("/api/food", get(foods::list_foods))
        .route("/api/food/:id", get(foods::get_food))
        .route("/api/food/:id", put(foods::update_food))
        .route("/api/food/:id", delete(foods::delete_food))
        // Request logging
        .layer(axum::middleware::from_fn(logging_middleware))
        // CORS
        .layer(CorsLayer::permissive())
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Combined routes
pub fn all_routes() -> Router<AppState> {
    api_routes().merge(swagger_routes())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        foods::create_food,
        foods::list_foods,
        foods::get_food,
        foods::update_food,
        foods::delete_food,
    ),
    components(schemas(
        crate::models::FoodRequest,
        crate::models::FoodResponse,
        crate::models::HealthResponse,
    )),
    info(
        title = "Pantry API",
        version = "1.0.0",
        description = "RESTful API for managing food entities (name + calories)"
    )
)]
struct ApiDoc;
