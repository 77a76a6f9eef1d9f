//! Beneficiary module error types

use thiserror::Error;

/// Beneficiary registry errors
#[derive(Error, Debug)]
pub enum BeneficiaryError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid length for {field}: expected at most {max}, got {actual}")]
    InvalidLength {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Maximum transfer limit must be positive")]
    NonPositiveLimit,

    #[error("Beneficiary not found")]
    NotFound,

    #[error("Database error: {0}")]
    Store(String),
}

impl From<sqlx::Error> for BeneficiaryError {
    fn from(e: sqlx::Error) -> Self {
        BeneficiaryError::Store(e.to_string())
    }
}
