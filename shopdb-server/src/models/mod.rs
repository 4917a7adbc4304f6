//! Request and response shapes with validation
//!
//! Each entity has an Input shape (no id) and an Output shape (Input plus the
//! id the store assigned). Invalid input returns ValidationError, not panic.

pub mod customer;
pub mod item;
pub mod order;
pub mod validation;

pub use customer::{Customer, CustomerIn};
pub use item::{Item, ItemIn};
pub use order::{Order, OrderIn};
pub use validation::{Validate, ValidationError};
