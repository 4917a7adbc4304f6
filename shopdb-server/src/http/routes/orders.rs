//! Order endpoints
//!
//! Unknown customer or item ids are rejected by the store with 409.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::OrderRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson, ValidQuery};
use crate::models::{Order, OrderIn};
use crate::state::AppState;

/// Delete query: `?order_id=`
#[derive(Deserialize)]
pub struct DeleteOrderQuery {
    pub order_id: i64,
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = OrderRepo::new(state.gateway()).list().await?;
    Ok(Json(orders))
}

async fn get_order(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Order>, ApiError> {
    let order = OrderRepo::new(state.gateway()).get(id).await?;
    Ok(Json(order))
}

async fn create_order(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<OrderIn>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = OrderRepo::new(state.gateway()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_order(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<OrderIn>,
) -> Result<Json<Order>, ApiError> {
    let order = OrderRepo::new(state.gateway()).update(id, &input).await?;
    Ok(Json(order))
}

async fn delete_order(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DeleteOrderQuery>,
) -> Result<StatusCode, ApiError> {
    OrderRepo::new(state.gateway()).delete(query.order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Order routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/orders/",
            get(list_orders).post(create_order).delete(delete_order),
        )
        .route("/orders/{id}", get(get_order).put(update_order))
}
