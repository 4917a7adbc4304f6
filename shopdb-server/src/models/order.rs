//! Order shapes
//!
//! `customer_id` and `item_id` are only checked by the store's foreign keys.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{Validate, ValidationError};

/// Order fields as submitted by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderIn {
    pub customer_id: i64,
    pub item_id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: NaiveDateTime,
    pub status: bool,
}

impl Validate for OrderIn {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: OrderIn,
}

/// Lenient ISO-8601 timestamp parsing.
///
/// Offset timestamps are converted to naive UTC; naive ones are kept as is;
/// a bare date means midnight.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        raw.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid datetime '{}'", raw)))
    }
}
