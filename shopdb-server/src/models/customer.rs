//! Customer shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{self, Validate, ValidationError};

const MAX_NAME_LEN: usize = 25;
const MAX_SURNAME_LEN: usize = 25;
const MAX_EMAIL_LEN: usize = 40;
const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 15;

/// Customer fields as submitted by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CustomerIn {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

impl Validate for CustomerIn {
    /// # Rules
    /// - name, surname: max 25 characters
    /// - email: valid address, max 40 characters
    /// - password: 6 to 15 characters
    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("name", &self.name, MAX_NAME_LEN)?;
        validation::max_len("surname", &self.surname, MAX_SURNAME_LEN)?;
        validation::email("email", &self.email)?;
        validation::max_len("email", &self.email, MAX_EMAIL_LEN)?;
        validation::len_between("password", &self.password, MIN_PASSWORD_LEN, MAX_PASSWORD_LEN)
    }
}

/// Stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: CustomerIn,
}
