//! Foods Routes
//!
//! CRUD endpoints for the food catalog.
//!
//! - GET /foods - List all foods
//! - POST /foods - Create a food
//! - GET /foods/:id - Get a specific food
//! - PUT /foods/:id - Replace a food
//! - DELETE /foods/:id - Delete a food

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::EmptyResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::{Food, FoodId, FoodUpdate, NewFoodRecord};

/// GET /foods
///
/// List all foods in insertion order.
pub async fn list_foods(State(state): State<Arc<AppState>>) -> Json<Vec<Food>> {
    Json(state.catalog.list().await)
}

/// GET /foods/:id
pub async fn get_food(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FoodId>,
) -> ApiResult<Json<Food>> {
    Ok(Json(state.catalog.get(id).await?))
}

/// POST /foods
///
/// Create a food. The server assigns the id; `available` defaults to true.
pub async fn create_food(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewFoodRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Food>)> {
    let Json(record) = payload?;

    let food = state.catalog.create(record).await?;

    tracing::info!(food_id = food.id, name = %food.name, "Created food");

    Ok((StatusCode::CREATED, Json(food)))
}

/// PUT /foods/:id
///
/// Replace a food. The path id wins over any id in the body.
pub async fn update_food(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FoodId>,
    payload: Result<Json<FoodUpdate>, JsonRejection>,
) -> ApiResult<Json<Food>> {
    let Json(update) = payload?;

    let food = state.catalog.replace(id, update).await?;

    tracing::info!(food_id = id, "Updated food");

    Ok(Json(food))
}

/// DELETE /foods/:id
pub async fn delete_food(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FoodId>,
) -> ApiResult<Json<EmptyResponse>> {
    let removed = state.catalog.delete(id).await?;

    tracing::info!(food_id = id, name = %removed.name, "Deleted food");

    Ok(Json(EmptyResponse::default()))
}
