//! Account number generation
//!
//! Numbers are fixed-length random digit strings. Generation is optimistic
//! generate-and-check: retry until the store reports the number free. The
//! store's unique index stays authoritative - an insert that loses the race
//! surfaces [`AccountError::NumberCollision`] and the caller retries.
//! This is the only generate-and-check identifier in the system; ledger
//! references rely on UUID entropy alone.

use rand::Rng;
use sqlx::PgPool;

use super::error::AccountError;
use super::repository::AccountRepository;

/// Externally visible account number length, in decimal digits
pub const ACCOUNT_NUMBER_LEN: usize = 12;

/// Generate a random candidate account number (not checked against the store)
pub fn random_account_number() -> String {
    let mut rng = rand::thread_rng();
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Generate an account number the store does not currently hold
///
/// The check and the later insert are not atomic; see module docs for the
/// race handling.
pub async fn generate_unique(pool: &PgPool) -> Result<String, AccountError> {
    loop {
        let candidate = random_account_number();
        if AccountRepository::find_by_number(pool, &candidate)
            .await?
            .is_none()
        {
            return Ok(candidate);
        }
        tracing::debug!(number = %candidate, "Account number taken, regenerating");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_shape() {
        for _ in 0..100 {
            let number = random_account_number();
            assert_eq!(number.len(), ACCOUNT_NUMBER_LEN);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_numbers_vary() {
        let first = random_account_number();
        let distinct = (0..50).any(|_| random_account_number() != first);
        assert!(distinct, "Generator should not be constant");
    }
}
