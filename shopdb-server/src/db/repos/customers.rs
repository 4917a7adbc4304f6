//! Customer repository
//!
//! - create/update: write, then re-fetch by id (two statements, not atomic)
//! - delete: unconditional, referenced customers are rejected by the store

use crate::db::{DbError, Gateway};
use crate::models::{Customer, CustomerIn};

const RESOURCE: &str = "customer";

/// Customer repository
pub struct CustomerRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// List every customer in store order.
    pub async fn list(&self) -> Result<Vec<Customer>, DbError> {
        self.gateway
            .fetch_all(sqlx::query_as(
                "SELECT id, name, surname, email, password FROM customers ORDER BY id",
            ))
            .await
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: i64) -> Result<Customer, DbError> {
        self.gateway
            .fetch_one(
                sqlx::query_as(
                    "SELECT id, name, surname, email, password FROM customers WHERE id = ?",
                )
                .bind(id),
            )
            .await?
            .ok_or(DbError::NotFound {
                resource: RESOURCE,
                id,
            })
    }

    /// Insert a customer and return the stored record.
    pub async fn create(&self, input: &CustomerIn) -> Result<Customer, DbError> {
        let id = self
            .gateway
            .execute_write(
                sqlx::query(
                    "INSERT INTO customers (name, surname, email, password) VALUES (?, ?, ?, ?)",
                )
                .bind(&input.name)
                .bind(&input.surname)
                .bind(&input.email)
                .bind(&input.password),
            )
            .await?;

        tracing::info!(id, "customer created");
        self.get(id).await
    }

    /// Replace every field of a customer.
    ///
    /// A missing id is not checked up front; the re-fetch reports it.
    pub async fn update(&self, id: i64, input: &CustomerIn) -> Result<Customer, DbError> {
        self.gateway
            .execute(
                sqlx::query(
                    "UPDATE customers SET name = ?, surname = ?, email = ?, password = ? WHERE id = ?",
                )
                .bind(&input.name)
                .bind(&input.surname)
                .bind(&input.email)
                .bind(&input.password)
                .bind(id),
            )
            .await?;

        self.get(id).await
    }

    /// Delete a customer. Deleting a missing id succeeds.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.gateway
            .execute(sqlx::query("DELETE FROM customers WHERE id = ?").bind(id))
            .await?;

        tracing::info!(id, "customer deleted");
        Ok(())
    }

    /// Insert `count` synthetic customers named `customer{i}`.
    ///
    /// Seed rows are not validated.
    pub async fn seed(&self, count: u32) -> Result<(), DbError> {
        for i in 0..count {
            self.gateway
                .execute_write(
                    sqlx::query(
                        "INSERT INTO customers (name, surname, email, password) VALUES (?, ?, ?, ?)",
                    )
                    .bind(format!("customer{i}"))
                    .bind(format!("surname{i}"))
                    .bind(format!("customer{i}@mail.ru"))
                    .bind(format!("password{i}")),
                )
                .await?;
        }

        tracing::info!(count, "customers seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CustomerIn {
        CustomerIn {
            name: name.into(),
            surname: "Petrov".into(),
            email: format!("{name}@mail.ru"),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let gw = Gateway::in_memory().await.unwrap();
        let repo = CustomerRepo::new(&gw);

        let created = repo.create(&input("ivan")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.fields, input("ivan"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let gw = Gateway::in_memory().await.unwrap();

        let err = CustomerRepo::new(&gw).get(99).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "customer",
                id: 99
            }
        ));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let gw = Gateway::in_memory().await.unwrap();
        let repo = CustomerRepo::new(&gw);

        let created = repo.create(&input("ivan")).await.unwrap();
        let updated = repo.update(created.id, &input("olga")).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields, input("olga"));
        assert_eq!(repo.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let gw = Gateway::in_memory().await.unwrap();

        let err = CustomerRepo::new(&gw)
            .update(5, &input("olga"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 5, .. }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let gw = Gateway::in_memory().await.unwrap();
        let repo = CustomerRepo::new(&gw);

        let created = repo.create(&input("ivan")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        // Second delete is a no-op
        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn seed_names_are_sequential() {
        let gw = Gateway::in_memory().await.unwrap();
        let repo = CustomerRepo::new(&gw);

        repo.seed(3).await.unwrap();
        let all = repo.list().await.unwrap();

        assert_eq!(all.len(), 3);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.fields.name, format!("customer{i}"));
            assert_eq!(c.fields.surname, format!("surname{i}"));
            assert_eq!(c.fields.email, format!("customer{i}@mail.ru"));
            assert_eq!(c.fields.password, format!("password{i}"));
        }
    }
}
