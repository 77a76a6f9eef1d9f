//! Ledger entry data model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::status::EntryStatus;

/// Monetary type of a ledger entry
///
/// The transfer flow only produces TRANSFER; the remaining variants are part
/// of the taxonomy for deposit/withdrawal/interest/fee postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i16)]
pub enum EntryType {
    Transfer = 1,
    Deposit = 2,
    Withdrawal = 3,
    Interest = 4,
    Fee = 5,
}

impl EntryType {
    /// Get the numeric type ID for PostgreSQL storage
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Convert from PostgreSQL type ID
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(EntryType::Transfer),
            2 => Some(EntryType::Deposit),
            3 => Some(EntryType::Withdrawal),
            4 => Some(EntryType::Interest),
            5 => Some(EntryType::Fee),
            _ => None,
        }
    }

    /// Get human-readable type name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Transfer => "TRANSFER",
            EntryType::Deposit => "DEPOSIT",
            EntryType::Withdrawal => "WITHDRAWAL",
            EntryType::Interest => "INTEREST",
            EntryType::Fee => "FEE",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable record of a transfer attempt and its outcome
///
/// Amount, source, and destination never change after insert; only `status`
/// moves, and only along the FSM in [`EntryStatus`].
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub entry_id: i64,
    /// Opaque external identifier, unique across the ledger's lifetime
    pub reference: Uuid,
    /// Source account (None for pure deposits)
    pub account_id: Option<i64>,
    /// Destination internal account - mutually exclusive with `beneficiary_id`
    pub to_account_id: Option<i64>,
    /// Destination beneficiary - the transfer flow always sets this
    pub beneficiary_id: Option<i64>,
    pub entry_type: EntryType,
    pub amount: Decimal,
    pub currency: String,
    pub status: EntryStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry[{}] ref={} type={} amount={} {} status={}",
            self.entry_id,
            self.reference,
            self.entry_type,
            self.amount,
            self.currency,
            self.status
        )
    }
}

/// Fields for a new ledger entry; ids and timestamp are store-assigned
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub reference: Uuid,
    pub account_id: Option<i64>,
    pub to_account_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub entry_type: EntryType,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
}

impl NewLedgerEntry {
    /// A PENDING transfer entry from an account to a beneficiary, with a
    /// freshly generated reference
    pub fn transfer(
        account_id: i64,
        beneficiary_id: i64,
        amount: Decimal,
        currency: &str,
        description: Option<String>,
    ) -> Self {
        Self {
            reference: Uuid::new_v4(),
            account_id: Some(account_id),
            to_account_id: None,
            beneficiary_id: Some(beneficiary_id),
            entry_type: EntryType::Transfer,
            amount,
            currency: currency.to_string(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_entry_type_id_roundtrip() {
        let types = [
            EntryType::Transfer,
            EntryType::Deposit,
            EntryType::Withdrawal,
            EntryType::Interest,
            EntryType::Fee,
        ];

        for entry_type in types {
            let id = entry_type.id();
            assert_eq!(EntryType::from_id(id), Some(entry_type));
        }
        assert!(EntryType::from_id(0).is_none());
        assert!(EntryType::from_id(6).is_none());
    }

    #[test]
    fn test_new_transfer_entry() {
        let entry = NewLedgerEntry::transfer(7, 42, dec!(300.00), "USD", Some("rent".into()));

        assert_eq!(entry.account_id, Some(7));
        assert_eq!(entry.beneficiary_id, Some(42));
        assert!(entry.to_account_id.is_none());
        assert_eq!(entry.entry_type, EntryType::Transfer);
        assert_eq!(entry.amount, dec!(300.00));
        assert!(!entry.reference.is_nil());
    }

    #[test]
    fn test_references_are_unique() {
        // 10k sequential generations must not collide
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let entry = NewLedgerEntry::transfer(1, 1, dec!(1.00), "USD", None);
            assert!(seen.insert(entry.reference), "duplicate reference generated");
        }
    }
}
