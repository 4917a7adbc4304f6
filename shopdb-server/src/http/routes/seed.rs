//! Demo data endpoints
//!
//! Both routes are GETs for parity with existing clients.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{CustomerRepo, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::models::ValidationError;
use crate::state::AppState;

/// Seed response
#[derive(Serialize)]
pub struct SeedResponse {
    pub msg: &'static str,
}

const READY: SeedResponse = SeedResponse {
    msg: "database_ready",
};

fn seed_count(raw: i64) -> Result<u32, ApiError> {
    u32::try_from(raw).map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field: "cnt",
            reason: "must be a non-negative integer",
        })
    })
}

/// GET /create_table/{cnt} - insert `cnt` synthetic customers
async fn seed_customers(
    State(state): State<AppState>,
    RecordId(cnt): RecordId,
) -> Result<Json<SeedResponse>, ApiError> {
    let count = seed_count(cnt)?;
    CustomerRepo::new(state.gateway()).seed(count).await?;
    Ok(Json(READY))
}

/// GET /create_items/{cnt} - insert `cnt` synthetic items
async fn seed_items(
    State(state): State<AppState>,
    RecordId(cnt): RecordId,
) -> Result<Json<SeedResponse>, ApiError> {
    let count = seed_count(cnt)?;
    ItemRepo::new(state.gateway()).seed(count).await?;
    Ok(Json(READY))
}

/// Seed routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create_table/{cnt}", get(seed_customers))
        .route("/create_items/{cnt}", get(seed_items))
}
