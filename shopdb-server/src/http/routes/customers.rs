//! Customer endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::CustomerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson, ValidQuery};
use crate::models::{Customer, CustomerIn};
use crate::state::AppState;

/// Delete query: `?customer_id=`
#[derive(Deserialize)]
pub struct DeleteCustomerQuery {
    pub customer_id: i64,
}

/// GET /customers/ - list every customer
async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = CustomerRepo::new(state.gateway()).list().await?;
    Ok(Json(customers))
}

/// GET /customers/{id} - get a single customer
async fn get_customer(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Customer>, ApiError> {
    let customer = CustomerRepo::new(state.gateway()).get(id).await?;
    Ok(Json(customer))
}

/// POST /customers/ - create a customer
async fn create_customer(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CustomerIn>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = CustomerRepo::new(state.gateway()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/{id} - replace a customer
async fn update_customer(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<CustomerIn>,
) -> Result<Json<Customer>, ApiError> {
    let customer = CustomerRepo::new(state.gateway()).update(id, &input).await?;
    Ok(Json(customer))
}

/// DELETE /customers/?customer_id= - delete a customer
async fn delete_customer(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DeleteCustomerQuery>,
) -> Result<StatusCode, ApiError> {
    CustomerRepo::new(state.gateway())
        .delete(query.customer_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Customer routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/customers/",
            get(list_customers)
                .post(create_customer)
                .delete(delete_customer),
        )
        .route("/customers/{id}", get(get_customer).put(update_customer))
}
