//! Order repository
//!
//! Customer and item references are enforced by foreign keys; violations
//! surface as `DbError::ReferentialIntegrity`.

use crate::db::{DbError, Gateway};
use crate::models::{Order, OrderIn};

const RESOURCE: &str = "order";

/// Order repository
pub struct OrderRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> OrderRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Order>, DbError> {
        self.gateway
            .fetch_all(sqlx::query_as(
                "SELECT id, customer_id, item_id, date, status FROM orders ORDER BY id",
            ))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Order, DbError> {
        self.gateway
            .fetch_one(
                sqlx::query_as(
                    "SELECT id, customer_id, item_id, date, status FROM orders WHERE id = ?",
                )
                .bind(id),
            )
            .await?
            .ok_or(DbError::NotFound {
                resource: RESOURCE,
                id,
            })
    }

    pub async fn create(&self, input: &OrderIn) -> Result<Order, DbError> {
        let id = self
            .gateway
            .execute_write(
                sqlx::query(
                    "INSERT INTO orders (customer_id, item_id, date, status) VALUES (?, ?, ?, ?)",
                )
                .bind(input.customer_id)
                .bind(input.item_id)
                .bind(input.date)
                .bind(input.status),
            )
            .await?;

        tracing::info!(id, customer_id = input.customer_id, item_id = input.item_id, "order created");
        self.get(id).await
    }

    pub async fn update(&self, id: i64, input: &OrderIn) -> Result<Order, DbError> {
        self.gateway
            .execute(
                sqlx::query(
                    "UPDATE orders SET customer_id = ?, item_id = ?, date = ?, status = ? WHERE id = ?",
                )
                .bind(input.customer_id)
                .bind(input.item_id)
                .bind(input.date)
                .bind(input.status)
                .bind(id),
            )
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.gateway
            .execute(sqlx::query("DELETE FROM orders WHERE id = ?").bind(id))
            .await?;

        tracing::info!(id, "order deleted");
        Ok(())
    }
}
