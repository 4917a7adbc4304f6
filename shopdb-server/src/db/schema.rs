//! Table definitions for customers, items and orders
//!
//! Orders reference both customers and items. Deleting a referenced parent
//! is rejected by the store (no cascade).

use sqlx::SqlitePool;

use super::DbError;

pub const CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(25) NOT NULL,
    surname VARCHAR(25) NOT NULL,
    email VARCHAR(40) NOT NULL,
    password VARCHAR(15) NOT NULL
)
"#;

pub const ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(20) NOT NULL,
    description VARCHAR(100) NOT NULL,
    price INTEGER NOT NULL
)
"#;

pub const ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_id INTEGER NOT NULL REFERENCES customers(id),
    item_id INTEGER NOT NULL REFERENCES items(id),
    date DATETIME NOT NULL,
    status BOOLEAN NOT NULL
)
"#;

/// Create all tables if they do not exist yet.
///
/// Parents are created before `orders` so the foreign keys resolve.
pub async fn create_all(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Creating shop tables if missing...");

    for (table, ddl) in [
        ("customers", CUSTOMERS_TABLE),
        ("items", ITEMS_TABLE),
        ("orders", ORDERS_TABLE),
    ] {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "table ready");
    }

    tracing::info!("Schema ready");
    Ok(())
}
