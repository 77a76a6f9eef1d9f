//! Account module error types

use thiserror::Error;

/// Account store and lifecycle errors
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("No accounts found for the user")]
    NotFound,

    #[error("Generated account number already taken")]
    NumberCollision,

    #[error("Database error: {0}")]
    Store(String),
}

impl From<sqlx::Error> for AccountError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            AccountError::NumberCollision
        } else {
            AccountError::Store(e.to_string())
        }
    }
}

/// Check for a Postgres unique-constraint violation (SQLSTATE 23505)
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}
