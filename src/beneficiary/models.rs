//! Data models for registered beneficiaries

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// External payee registered by an account holder
#[derive(Debug, Clone)]
pub struct Beneficiary {
    pub beneficiary_id: i64,
    /// Owning user (the registering account holder)
    pub owner_id: i64,
    pub name: String,
    pub bank_name: String,
    /// Account number at the external bank, free-form
    pub account_number: String,
    pub routing_code: Option<String>,
    /// Per-beneficiary cap on a single transfer; None = unlimited
    pub max_transfer_limit: Option<Decimal>,
    pub relationship: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for registering or updating a beneficiary
#[derive(Debug, Clone)]
pub struct NewBeneficiary {
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub routing_code: Option<String>,
    pub max_transfer_limit: Option<Decimal>,
    pub relationship: Option<String>,
}
