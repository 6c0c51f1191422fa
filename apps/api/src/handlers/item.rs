//! Handlers for the /items endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use billing_core::{Item, NewItem};

use crate::error::ApiError;
use crate::state::AppState;

use super::bad_payload;

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.db.items().list().await?;
    Ok(Json(items))
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(new_item) = body.map_err(bad_payload)?;

    let item = state.db.items().insert(&new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .db
        .items()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))?;

    Ok(Json(item))
}

/// PUT /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(new_item) = body.map_err(bad_payload)?;

    state.db.items().update(id, &new_item).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.items().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
