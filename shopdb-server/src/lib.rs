//! shopdb-server: CRUD HTTP server for a small shop database
//!
//! Exposes customers, items and orders over REST, backed by a single
//! SQLite store. Each endpoint maps one request onto one SQL statement
//! (plus a read-back for writes).

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{DbError, Gateway};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
