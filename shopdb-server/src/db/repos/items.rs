//! Item repository

use rand::Rng;

use crate::db::{DbError, Gateway};
use crate::models::{Item, ItemIn};

const RESOURCE: &str = "item";

/// Seeded prices are drawn from this range.
pub const SEED_PRICE_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Item repository
pub struct ItemRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> ItemRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Item>, DbError> {
        self.gateway
            .fetch_all(sqlx::query_as(
                "SELECT id, name, description, price FROM items ORDER BY id",
            ))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Item, DbError> {
        self.gateway
            .fetch_one(
                sqlx::query_as("SELECT id, name, description, price FROM items WHERE id = ?")
                    .bind(id),
            )
            .await?
            .ok_or(DbError::NotFound {
                resource: RESOURCE,
                id,
            })
    }

    pub async fn create(&self, input: &ItemIn) -> Result<Item, DbError> {
        let id = self
            .gateway
            .execute_write(
                sqlx::query("INSERT INTO items (name, description, price) VALUES (?, ?, ?)")
                    .bind(&input.name)
                    .bind(&input.description)
                    .bind(input.price),
            )
            .await?;

        tracing::info!(id, "item created");
        self.get(id).await
    }

    pub async fn update(&self, id: i64, input: &ItemIn) -> Result<Item, DbError> {
        self.gateway
            .execute(
                sqlx::query("UPDATE items SET name = ?, description = ?, price = ? WHERE id = ?")
                    .bind(&input.name)
                    .bind(&input.description)
                    .bind(input.price)
                    .bind(id),
            )
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.gateway
            .execute(sqlx::query("DELETE FROM items WHERE id = ?").bind(id))
            .await?;

        tracing::info!(id, "item deleted");
        Ok(())
    }

    /// Insert `count` synthetic items with a random price in 1..=10.
    pub async fn seed(&self, count: u32) -> Result<(), DbError> {
        for i in 0..count {
            let price = rand::thread_rng().gen_range(SEED_PRICE_RANGE);
            self.gateway
                .execute_write(
                    sqlx::query("INSERT INTO items (name, description, price) VALUES (?, ?, ?)")
                        .bind(format!("item{i}"))
                        .bind(format!("description{i}"))
                        .bind(price),
                )
                .await?;
        }

        tracing::info!(count, "items seeded");
        Ok(())
    }
}
