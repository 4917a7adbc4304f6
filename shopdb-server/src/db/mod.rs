//! Database layer - gateway, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default), injected via `AppState`
//! - One statement per gateway call - no multi-statement transactions
//! - Rely on DB constraints for referential integrity - no check-then-insert
//! - Parameterized statements only - no string-built SQL

pub mod gateway;
pub mod pool;
pub mod repos;
pub mod schema;

pub use gateway::{DbError, Gateway};
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
