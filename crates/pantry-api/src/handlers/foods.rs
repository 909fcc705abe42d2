//! Food collection API handlers

use crate::{
    error::{ApiError, ApiResult},
    models::{FoodRequest, FoodResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

/// Reject request bodies that are not JSON objects before the store
/// ever sees them
fn require_object(payload: &Value) -> ApiResult<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".to_string()))
}

/// Create a new food entity
#[utoipa::path(
    post,
    path = "/api/food",
    request_body = FoodRequest,
    responses(
        (status = 201, description = "Food created", body = FoodResponse),
        (status = 400, description = "Missing or invalid name/calories")
    )
)]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<FoodResponse>)> {
    let food = state.store.create(require_object(&payload)?)?;

    Ok((StatusCode::CREATED, Json(food.into())))
}

/// List all food entities
#[utoipa::path(
    get,
    path = "/api/food",
    responses(
        (status = 200, description = "All stored foods in insertion order", body = Vec<FoodResponse>)
    )
)]
pub async fn list_foods(State(state): State<AppState>) -> Json<Vec<FoodResponse>> {
    let foods = state.store.list();

    Json(foods.into_iter().map(FoodResponse::from).collect())
}

/// Get a food entity by id
#[utoipa::path(
    get,
    path = "/api/food/{id}",
    params(("id" = String, Path, description = "Food id")),
    responses(
        (status = 200, description = "Food entity", body = FoodResponse),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FoodResponse>> {
    let food = state.store.get(&id)?;

    Ok(Json(food.into()))
}

/// Update a food entity in place
#[utoipa::path(
    put,
    path = "/api/food/{id}",
    params(("id" = String, Path, description = "Food id")),
    request_body = FoodRequest,
    responses(
        (status = 200, description = "Updated food entity", body = FoodResponse),
        (status = 400, description = "Invalid payload or body id differs from path id"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<FoodResponse>> {
    let food = state.store.update(&id, require_object(&payload)?)?;

    Ok(Json(food.into()))
}

/// Delete a food entity
#[utoipa::path(
    delete,
    path = "/api/food/{id}",
    params(("id" = String, Path, description = "Food id")),
    responses(
        (status = 204, description = "Food deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&id)?;

    Ok(StatusCode::NO_CONTENT)
}
