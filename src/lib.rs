//! corebank - Funds-Transfer and Ledger-Consistency Engine
//!
//! The core of a banking backend: accounts, beneficiaries, an append-mostly
//! transaction ledger, an audit trail, and the transfer orchestrator that
//! keeps account balances and the ledger consistent over one PostgreSQL
//! store. The request-handling layer (authentication, routing) lives in a
//! collaborating service and hands this crate an authenticated owner id.
//!
//! # Modules
//!
//! - [`account`] - Account store and account-number generation
//! - [`beneficiary`] - Beneficiary registry with per-payee transfer limits
//! - [`ledger`] - Ledger entries and their status FSM
//! - [`audit`] - Append-only audit trail
//! - [`transfer`] - Transfer orchestrator and history reader
//! - [`db`] - PostgreSQL connection pool
//! - [`schema`] - Table provisioning
//! - [`config`] - YAML application config
//! - [`logging`] - tracing initialization

pub mod account;
pub mod audit;
pub mod beneficiary;
pub mod config;
pub mod db;
pub mod ledger;
pub mod logging;
pub mod schema;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountKind, AccountService};
pub use beneficiary::{Beneficiary, BeneficiaryService, NewBeneficiary};
pub use db::Database;
pub use ledger::{EntryStatus, EntryType, LedgerEntry, LedgerRepository};
pub use transfer::{HistoryItem, TransferError, TransferReceipt, TransferRequest, TransferService};
