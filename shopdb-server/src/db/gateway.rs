//! Persistence gateway
//!
//! Owns the connection pool and exposes four primitives. Every call runs
//! exactly one statement on a pooled connection: no transactions, no retry.

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};

use super::{pool, schema};

/// Untyped statement (insert/update/delete)
pub type Statement<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Statement whose rows decode into `T`
pub type TypedStatement<'q, T> = QueryAs<'q, Sqlite, T, SqliteArguments<'q>>;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    #[error("referential integrity violated: {0}")]
    ReferentialIntegrity(String),

    #[error("store unavailable: {0}")]
    Unavailable(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::ReferentialIntegrity(db.message().to_owned())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(e)
            }
            _ => Self::Sqlx(e),
        }
    }
}

/// Pooled access to the store
#[derive(Clone)]
pub struct Gateway {
    pool: SqlitePool,
}

impl Gateway {
    /// Wrap an existing pool. The schema is not touched.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the store at `database_url` and create missing tables.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = pool::create_pool_with_options(database_url, max_connections).await?;
        schema::create_all(&pool).await?;
        Ok(Self { pool })
    }

    /// Private in-memory store with the schema in place.
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = pool::create_memory_pool().await?;
        schema::create_all(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run an insert and return the id the store assigned.
    pub async fn execute_write(&self, statement: Statement<'_>) -> Result<i64, DbError> {
        let result = statement.execute(&self.pool).await?;
        let id = result.last_insert_rowid();
        tracing::debug!(id, "insert executed");
        Ok(id)
    }

    /// Fetch at most one row. A missing row is `None`, not an error.
    pub async fn fetch_one<T>(&self, statement: TypedStatement<'_, T>) -> Result<Option<T>, DbError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        Ok(statement.fetch_optional(&self.pool).await?)
    }

    /// Fetch every row the statement yields, in store order.
    pub async fn fetch_all<T>(&self, statement: TypedStatement<'_, T>) -> Result<Vec<T>, DbError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        let rows = statement.fetch_all(&self.pool).await?;
        tracing::debug!(rows = rows.len(), "select executed");
        Ok(rows)
    }

    /// Run an update or delete. Zero affected rows is not an error.
    pub async fn execute(&self, statement: Statement<'_>) -> Result<(), DbError> {
        let result = statement.execute(&self.pool).await?;
        tracing::debug!(rows_affected = result.rows_affected(), "statement executed");
        Ok(())
    }
}
