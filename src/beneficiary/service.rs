//! Beneficiary registry operations

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::error::BeneficiaryError;
use super::models::{Beneficiary, NewBeneficiary};
use super::repository::BeneficiaryRepository;

const NAME_MAX: usize = 100;
const BANK_NAME_MAX: usize = 100;
const ACCOUNT_NUMBER_MAX: usize = 20;
const ROUTING_CODE_MAX: usize = 20;
const RELATIONSHIP_MAX: usize = 50;

/// Beneficiary registration and maintenance
pub struct BeneficiaryService;

impl BeneficiaryService {
    /// Register a new beneficiary for a customer
    pub async fn register(
        pool: &PgPool,
        owner_id: i64,
        new: NewBeneficiary,
    ) -> Result<Beneficiary, BeneficiaryError> {
        validate(&new)?;
        let beneficiary = BeneficiaryRepository::insert(pool, owner_id, &new).await?;

        tracing::info!(
            owner_id,
            beneficiary_id = beneficiary.beneficiary_id,
            name = %beneficiary.name,
            "Beneficiary registered"
        );
        Ok(beneficiary)
    }

    /// Active beneficiaries registered by a customer
    pub async fn list(pool: &PgPool, owner_id: i64) -> Result<Vec<Beneficiary>, BeneficiaryError> {
        Ok(BeneficiaryRepository::find_active_by_owner(pool, owner_id).await?)
    }

    /// Update a beneficiary in place
    pub async fn update(
        pool: &PgPool,
        owner_id: i64,
        beneficiary_id: i64,
        new: NewBeneficiary,
    ) -> Result<Beneficiary, BeneficiaryError> {
        validate(&new)?;
        let updated = BeneficiaryRepository::update(pool, owner_id, beneficiary_id, &new).await?;
        if !updated {
            return Err(BeneficiaryError::NotFound);
        }

        BeneficiaryRepository::get(pool, beneficiary_id)
            .await?
            .ok_or(BeneficiaryError::NotFound)
    }

    /// Soft-deactivate a beneficiary; its ledger history stays resolvable
    pub async fn deactivate(
        pool: &PgPool,
        owner_id: i64,
        beneficiary_id: i64,
    ) -> Result<(), BeneficiaryError> {
        let done = BeneficiaryRepository::deactivate(pool, owner_id, beneficiary_id).await?;
        if !done {
            return Err(BeneficiaryError::NotFound);
        }

        tracing::info!(owner_id, beneficiary_id, "Beneficiary deactivated");
        Ok(())
    }
}

fn validate(new: &NewBeneficiary) -> Result<(), BeneficiaryError> {
    require("name", &new.name, NAME_MAX)?;
    require("bank name", &new.bank_name, BANK_NAME_MAX)?;
    require("account number", &new.account_number, ACCOUNT_NUMBER_MAX)?;

    if let Some(code) = &new.routing_code {
        check_len("routing code", code, ROUTING_CODE_MAX)?;
    }
    if let Some(relationship) = &new.relationship {
        check_len("relationship", relationship, RELATIONSHIP_MAX)?;
    }
    if let Some(limit) = new.max_transfer_limit {
        if limit <= Decimal::ZERO {
            return Err(BeneficiaryError::NonPositiveLimit);
        }
    }
    Ok(())
}

fn require(field: &'static str, value: &str, max: usize) -> Result<(), BeneficiaryError> {
    if value.trim().is_empty() {
        return Err(BeneficiaryError::MissingField { field });
    }
    check_len(field, value, max)
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), BeneficiaryError> {
    if value.len() > max {
        return Err(BeneficiaryError::InvalidLength {
            field,
            max,
            actual: value.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> NewBeneficiary {
        NewBeneficiary {
            name: "Jordan Lee".to_string(),
            bank_name: "First National".to_string(),
            account_number: "998877665544".to_string(),
            routing_code: None,
            max_transfer_limit: None,
            relationship: None,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(validate(&sample()).is_ok());
    }

    #[test]
    fn test_validate_requires_name() {
        let mut new = sample();
        new.name = "   ".to_string();
        assert!(matches!(
            validate(&new),
            Err(BeneficiaryError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn test_validate_length_caps() {
        let mut new = sample();
        new.bank_name = "x".repeat(101);
        assert!(matches!(
            validate(&new),
            Err(BeneficiaryError::InvalidLength {
                field: "bank name",
                max: 100,
                actual: 101,
            })
        ));

        let mut new = sample();
        new.relationship = Some("y".repeat(51));
        assert!(matches!(
            validate(&new),
            Err(BeneficiaryError::InvalidLength {
                field: "relationship",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_limit_must_be_positive() {
        let mut new = sample();
        new.max_transfer_limit = Some(dec!(0.00));
        assert!(matches!(
            validate(&new),
            Err(BeneficiaryError::NonPositiveLimit)
        ));

        new.max_transfer_limit = Some(dec!(-5.00));
        assert!(matches!(
            validate(&new),
            Err(BeneficiaryError::NonPositiveLimit)
        ));

        new.max_transfer_limit = Some(dec!(0.01));
        assert!(validate(&new).is_ok());
    }
}
