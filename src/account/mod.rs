//! Account store
//!
//! PostgreSQL-backed storage for customer accounts: the single source of
//! truth for each account's current balance.

pub mod error;
pub mod models;
pub mod number;
pub mod repository;
pub mod service;

pub use error::AccountError;
pub use models::{Account, AccountKind};
pub use number::ACCOUNT_NUMBER_LEN;
pub use repository::AccountRepository;
pub use service::AccountService;
