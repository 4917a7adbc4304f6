//! Item endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson, ValidQuery};
use crate::models::{Item, ItemIn};
use crate::state::AppState;

/// Delete query: `?item_id=`
#[derive(Deserialize)]
pub struct DeleteItemQuery {
    pub item_id: i64,
}

/// GET /items/
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemRepo::new(state.gateway()).list().await?;
    Ok(Json(items))
}

/// GET /items/{id}
async fn get_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(state.gateway()).get(id).await?;
    Ok(Json(item))
}

/// POST /items/
async fn create_item(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<ItemIn>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = ItemRepo::new(state.gateway()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id}
async fn update_item(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<ItemIn>,
) -> Result<Json<Item>, ApiError> {
    let item = ItemRepo::new(state.gateway()).update(id, &input).await?;
    Ok(Json(item))
}

/// DELETE /items/?item_id=
async fn delete_item(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DeleteItemQuery>,
) -> Result<StatusCode, ApiError> {
    ItemRepo::new(state.gateway()).delete(query.item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/items/",
            get(list_items).post(create_item).delete(delete_item),
        )
        .route("/items/{id}", get(get_item).put(update_item))
}
