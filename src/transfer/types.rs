//! Transfer request and response types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::ledger::LedgerEntry;

/// Transfer request from the collaborating request layer
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Target beneficiary
    pub beneficiary_id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    /// Source account number; None falls back to the caller's first active
    /// account
    pub source_account: Option<String>,
    /// Caller address for the audit trail
    pub origin: Option<String>,
}

impl TransferRequest {
    /// Create a new transfer request
    pub fn new(beneficiary_id: i64, amount: Decimal) -> Self {
        Self {
            beneficiary_id,
            amount,
            description: None,
            source_account: None,
            origin: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Name the source account explicitly instead of the first-account
    /// fallback
    pub fn with_source_account(mut self, account_number: &str) -> Self {
        self.source_account = Some(account_number.to_string());
        self
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }
}

/// What the collaborator hands back to the caller on success
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub transaction_id: i64,
    pub transaction_reference: Uuid,
}

impl From<&LedgerEntry> for TransferReceipt {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            transaction_id: entry.entry_id,
            transaction_reference: entry.reference,
        }
    }
}

/// One row of a customer's transfer history
#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub reference: Uuid,
    /// Source account number, when the entry debited one of the caller's
    /// accounts
    pub from_account: Option<String>,
    /// Destination account number - internal account or external beneficiary
    pub counterpart_account: Option<String>,
    /// External bank name when the destination is a beneficiary
    pub counterpart_bank: Option<String>,
    pub entry_type: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
