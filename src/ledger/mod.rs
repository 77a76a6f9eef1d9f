//! Transaction ledger
//!
//! Append-mostly history of transfer attempts. Entries are immutable apart
//! from their status, which moves along the FSM in [`status::EntryStatus`].

pub mod models;
pub mod repository;
pub mod status;

pub use models::{EntryType, LedgerEntry, NewLedgerEntry};
pub use repository::LedgerRepository;
pub use status::EntryStatus;
