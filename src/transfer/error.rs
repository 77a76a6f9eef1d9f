//! Transfer error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a transfer is rejected or fails
///
/// The validation kinds are deterministic and non-retriable; `Store` covers
/// transient failures (lock contention, timeout, connectivity) and is safe
/// to retry as a whole new attempt - a failed attempt consumed a fresh
/// reference and credited no one.
#[derive(Error, Debug, Clone)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("No accounts found for the user")]
    NoAccountFound,

    #[error("Beneficiary not found")]
    BeneficiaryNotFound,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Account has zero or negative balance")]
    EmptyBalance,

    #[error("Insufficient balance. Current balance: {balance}, Transfer amount: {amount}")]
    InsufficientBalance { balance: Decimal, amount: Decimal },

    #[error("Transfer amount exceeds maximum limit for this beneficiary")]
    LimitExceeded { limit: Decimal, amount: Decimal },

    // === System Errors ===
    #[error("Transfer could not be completed: {0}")]
    Store(String),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::NoAccountFound => "NO_ACCOUNT_FOUND",
            TransferError::BeneficiaryNotFound => "BENEFICIARY_NOT_FOUND",
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            // Zero balance and amount-over-balance are one kind with two
            // distinguishable messages
            TransferError::EmptyBalance => "INSUFFICIENT_BALANCE",
            TransferError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            TransferError::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            TransferError::Store(_) => "STORE_FAILURE",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::NoAccountFound | TransferError::BeneficiaryNotFound => 404,
            TransferError::InvalidAmount => 400,
            TransferError::EmptyBalance
            | TransferError::InsufficientBalance { .. }
            | TransferError::LimitExceeded { .. } => 422,
            TransferError::Store(_) => 503,
        }
    }

    /// Whether retrying the whole operation can succeed
    pub fn is_retriable(&self) -> bool {
        matches!(self, TransferError::Store(_))
    }
}

impl From<sqlx::Error> for TransferError {
    fn from(e: sqlx::Error) -> Self {
        TransferError::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::NoAccountFound.code(), "NO_ACCOUNT_FOUND");
        assert_eq!(TransferError::EmptyBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(
            TransferError::InsufficientBalance {
                balance: dec!(10.00),
                amount: dec!(20.00),
            }
            .code(),
            "INSUFFICIENT_BALANCE"
        );
        assert_eq!(
            TransferError::LimitExceeded {
                limit: dec!(500.00),
                amount: dec!(500.01),
            }
            .code(),
            "LIMIT_EXCEEDED"
        );
    }

    #[test]
    fn test_insufficient_balance_messages_differ() {
        let zero = TransferError::EmptyBalance.to_string();
        let over = TransferError::InsufficientBalance {
            balance: dec!(100.00),
            amount: dec!(250.00),
        }
        .to_string();

        assert_ne!(zero, over);
        assert!(over.contains("100.00"));
        assert!(over.contains("250.00"));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::NoAccountFound.http_status(), 404);
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::EmptyBalance.http_status(), 422);
        assert_eq!(TransferError::Store("down".into()).http_status(), 503);
    }

    #[test]
    fn test_only_store_is_retriable() {
        assert!(TransferError::Store("timeout".into()).is_retriable());
        assert!(!TransferError::NoAccountFound.is_retriable());
        assert!(!TransferError::EmptyBalance.is_retriable());
        assert!(
            !TransferError::LimitExceeded {
                limit: dec!(1.00),
                amount: dec!(2.00),
            }
            .is_retriable()
        );
    }
}
