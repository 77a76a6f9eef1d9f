//! Beneficiary registry
//!
//! Payee records registered by account holders, each with an optional cap
//! on a single transfer amount.

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::BeneficiaryError;
pub use models::{Beneficiary, NewBeneficiary};
pub use repository::BeneficiaryRepository;
pub use service::BeneficiaryService;
