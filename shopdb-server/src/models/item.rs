//! Item shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{self, Validate, ValidationError};

const MAX_NAME_LEN: usize = 20;
const MAX_DESCRIPTION_LEN: usize = 100;

/// Item fields as submitted by clients
///
/// Price sign is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ItemIn {
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl Validate for ItemIn {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("name", &self.name, MAX_NAME_LEN)?;
        validation::max_len("description", &self.description, MAX_DESCRIPTION_LEN)
    }
}

/// Stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: ItemIn,
}
