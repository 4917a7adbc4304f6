//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared `Gateway`, one statement per gateway call
//! - Writes are followed by a re-fetch so the returned id is the store's
//! - Missing rows become `DbError::NotFound`

pub mod customers;
pub mod items;
pub mod orders;

pub use customers::CustomerRepo;
pub use items::ItemRepo;
pub use orders::OrderRepo;
