//! Data models for customer accounts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Account class
///
/// Savings accounts accrue interest (posted by a collaborator); current
/// accounts do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum AccountKind {
    Savings = 1,
    Current = 2,
}

impl AccountKind {
    /// Get the numeric kind ID for PostgreSQL storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from PostgreSQL kind ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(AccountKind::Savings),
            2 => Some(AccountKind::Current),
            _ => None,
        }
    }

    /// Get human-readable kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "SAVINGS",
            AccountKind::Current => "CURRENT",
        }
    }

    /// Default annual interest rate for new accounts of this kind
    pub fn default_interest_rate(&self) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::new(400, 2), // 4.00
            AccountKind::Current => Decimal::ZERO,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer account
///
/// Balance is the signed sum of COMPLETED ledger entries touching the
/// account, starting from zero, and never goes negative. Only the transfer
/// flow (debit) and deposit/withdrawal postings mutate it.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: i64,
    /// Owning user (external collaborator's identity)
    pub owner_id: i64,
    /// Externally visible 12-digit number, unique across the store
    pub account_number: String,
    pub kind: AccountKind,
    pub balance: Decimal,
    pub interest_rate: Decimal,
    pub is_active: bool,
    pub opened_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_id_roundtrip() {
        assert_eq!(AccountKind::from_id(1), Some(AccountKind::Savings));
        assert_eq!(AccountKind::from_id(2), Some(AccountKind::Current));
        assert_eq!(AccountKind::from_id(0), None);
        assert_eq!(AccountKind::from_id(3), None);
    }

    #[test]
    fn test_default_interest_rate() {
        assert_eq!(AccountKind::Savings.default_interest_rate(), dec!(4.00));
        assert_eq!(AccountKind::Current.default_interest_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountKind::Savings.to_string(), "SAVINGS");
        assert_eq!(AccountKind::Current.to_string(), "CURRENT");
    }
}
