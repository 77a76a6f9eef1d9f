//! Pure validation checks for transfer requests
//!
//! Kept free of store access so the funds check can run twice: once against
//! the advisory pre-read, and again under the row lock inside the debit
//! transaction.

use rust_decimal::Decimal;

use super::error::TransferError;

/// Amount must be strictly positive
pub fn check_amount(amount: Decimal) -> Result<(), TransferError> {
    if amount <= Decimal::ZERO {
        return Err(TransferError::InvalidAmount);
    }
    Ok(())
}

/// Balance must be strictly positive and cover the amount
pub fn check_funds(balance: Decimal, amount: Decimal) -> Result<(), TransferError> {
    if balance <= Decimal::ZERO {
        return Err(TransferError::EmptyBalance);
    }
    if amount > balance {
        return Err(TransferError::InsufficientBalance { balance, amount });
    }
    Ok(())
}

/// Amount must not exceed the beneficiary's limit when one is set
pub fn check_limit(amount: Decimal, limit: Option<Decimal>) -> Result<(), TransferError> {
    if let Some(limit) = limit {
        if amount > limit {
            return Err(TransferError::LimitExceeded { limit, amount });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_amount() {
        assert!(check_amount(dec!(0.01)).is_ok());
        assert!(matches!(
            check_amount(dec!(0.00)),
            Err(TransferError::InvalidAmount)
        ));
        assert!(matches!(
            check_amount(dec!(-1.00)),
            Err(TransferError::InvalidAmount)
        ));
    }

    #[test]
    fn test_check_funds_zero_balance() {
        assert!(matches!(
            check_funds(dec!(0.00), dec!(1.00)),
            Err(TransferError::EmptyBalance)
        ));
        assert!(matches!(
            check_funds(dec!(-5.00), dec!(1.00)),
            Err(TransferError::EmptyBalance)
        ));
    }

    #[test]
    fn test_check_funds_over_balance() {
        let err = check_funds(dec!(100.00), dec!(100.01)).unwrap_err();
        assert!(matches!(
            err,
            TransferError::InsufficientBalance {
                balance,
                amount,
            } if balance == dec!(100.00) && amount == dec!(100.01)
        ));
    }

    #[test]
    fn test_check_funds_exact_balance_allowed() {
        assert!(check_funds(dec!(100.00), dec!(100.00)).is_ok());
        assert!(check_funds(dec!(100.00), dec!(99.99)).is_ok());
    }

    #[test]
    fn test_check_limit_boundary() {
        // 500.00 passes, 500.01 is rejected
        assert!(check_limit(dec!(500.00), Some(dec!(500.00))).is_ok());
        let err = check_limit(dec!(500.01), Some(dec!(500.00))).unwrap_err();
        assert!(matches!(
            err,
            TransferError::LimitExceeded { limit, amount }
                if limit == dec!(500.00) && amount == dec!(500.01)
        ));
    }

    #[test]
    fn test_check_limit_unset_is_unlimited() {
        assert!(check_limit(dec!(1000000.00), None).is_ok());
    }
}
