//! Transfer orchestrator
//!
//! Moves money from a customer account to a registered beneficiary: validate
//! the request, record a PENDING ledger entry, then debit the account, write
//! the audit record, and complete the entry as one database transaction.
//!
//! The PENDING insert commits on its own, before the debit transaction
//! opens. A failure inside the debit transaction rolls everything in it
//! back, then flips the entry PENDING -> FAILED in a separate write - the
//! attempt always reaches a terminal status, and the debit never survives a
//! failed audit or completion step.

use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::account::{Account, AccountRepository};
use crate::audit::{AuditRepository, ENTITY_LEDGER_ENTRY, NewAuditRecord};
use crate::beneficiary::{Beneficiary, BeneficiaryRepository};
use crate::ledger::{EntryStatus, EntryType, LedgerEntry, LedgerRepository, NewLedgerEntry};

use super::error::TransferError;
use super::types::{HistoryItem, TransferRequest};
use super::validation;

/// Currency recorded on ledger entries; conversion is out of scope
const CURRENCY: &str = "USD";

/// The transfer orchestrator and history reader
pub struct TransferService;

impl TransferService {
    /// Execute a transfer to a beneficiary
    ///
    /// Validation failures reject the request before any ledger entry
    /// exists. Once the PENDING entry is recorded the attempt ends in a
    /// terminal status: COMPLETED when the debit transaction commits,
    /// FAILED otherwise.
    pub async fn execute(
        pool: &PgPool,
        owner_id: i64,
        request: TransferRequest,
    ) -> Result<LedgerEntry, TransferError> {
        let account = Self::resolve_source(pool, owner_id, &request).await?;
        let beneficiary = BeneficiaryRepository::get(pool, request.beneficiary_id)
            .await?
            .ok_or(TransferError::BeneficiaryNotFound)?;

        validation::check_amount(request.amount)?;
        validation::check_funds(account.balance, request.amount)?;
        validation::check_limit(request.amount, beneficiary.max_transfer_limit)?;

        let new = NewLedgerEntry::transfer(
            account.account_id,
            beneficiary.beneficiary_id,
            request.amount,
            CURRENCY,
            request.description.clone(),
        );
        let entry = LedgerRepository::insert(pool, &new).await?;

        match Self::settle(
            pool,
            owner_id,
            &beneficiary,
            &entry,
            request.origin.as_deref(),
        )
        .await
        {
            Ok(()) => {
                tracing::info!(
                    reference = %entry.reference,
                    owner_id,
                    account_number = %account.account_number,
                    beneficiary_id = beneficiary.beneficiary_id,
                    amount = %entry.amount,
                    "Transfer completed"
                );
                LedgerRepository::get(pool, entry.entry_id)
                    .await?
                    .ok_or_else(|| TransferError::Store("completed entry not readable".to_string()))
            }
            Err(e) => {
                Self::mark_failed(pool, &entry).await;
                tracing::warn!(
                    reference = %entry.reference,
                    owner_id,
                    error = %e,
                    "Transfer failed"
                );
                Err(e)
            }
        }
    }

    /// Paginated transfer history for a customer, newest first
    ///
    /// Covers ledger entries where one of the owner's accounts is the
    /// source or the destination. Pure read.
    pub async fn history(
        pool: &PgPool,
        owner_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<HistoryItem>, TransferError> {
        let limit = i64::from(page_size);
        let offset = i64::from(page) * limit;

        let rows = sqlx::query(
            r#"
            SELECT e.reference, e.entry_type, e.amount, e.currency, e.status,
                   e.description, e.created_at,
                   src.account_number AS source_number,
                   dst.account_number AS dest_number,
                   b.account_number AS beneficiary_number,
                   b.bank_name AS beneficiary_bank
            FROM ledger_entries e
            LEFT JOIN accounts src ON e.account_id = src.account_id
            LEFT JOIN accounts dst ON e.to_account_id = dst.account_id
            LEFT JOIN beneficiaries b ON e.beneficiary_id = b.beneficiary_id
            WHERE src.owner_id = $1 OR dst.owner_id = $1
            ORDER BY e.created_at DESC, e.entry_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let items = rows
            .iter()
            .map(row_to_history_item)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(items)
    }

    /// Resolve the source account for a request
    ///
    /// An explicit account number must belong to the caller and be active.
    /// Without one, the caller's first active account is used (stable
    /// ordering by account id).
    async fn resolve_source(
        pool: &PgPool,
        owner_id: i64,
        request: &TransferRequest,
    ) -> Result<Account, TransferError> {
        match &request.source_account {
            Some(number) => AccountRepository::find_by_number(pool, number)
                .await?
                .filter(|a| a.owner_id == owner_id && a.is_active)
                .ok_or(TransferError::NoAccountFound),
            None => {
                let mut accounts = AccountRepository::find_active_by_owner(pool, owner_id).await?;
                if accounts.is_empty() {
                    return Err(TransferError::NoAccountFound);
                }
                Ok(accounts.remove(0))
            }
        }
    }

    /// Debit, audit, and complete as one database transaction
    ///
    /// The balance is re-read under `FOR UPDATE` so concurrent transfers
    /// from the same account serialize; the pre-transaction read was
    /// advisory only.
    async fn settle(
        pool: &PgPool,
        owner_id: i64,
        beneficiary: &Beneficiary,
        entry: &LedgerEntry,
        origin: Option<&str>,
    ) -> Result<(), TransferError> {
        let account_id = entry
            .account_id
            .ok_or_else(|| TransferError::Store("transfer entry without source".to_string()))?;

        let mut tx = pool.begin().await?;

        let balance: Decimal =
            sqlx::query_scalar("SELECT balance FROM accounts WHERE account_id = $1 FOR UPDATE")
                .bind(account_id)
                .fetch_one(&mut *tx)
                .await?;
        validation::check_funds(balance, entry.amount)?;

        sqlx::query(
            "UPDATE accounts SET balance = balance - $1, last_activity_at = NOW()
             WHERE account_id = $2",
        )
        .bind(entry.amount)
        .bind(account_id)
        .execute(&mut *tx)
        .await?;

        AuditRepository::append(
            &mut *tx,
            &NewAuditRecord {
                user_id: owner_id,
                action: "TRANSFER",
                entity: ENTITY_LEDGER_ENTRY,
                entity_id: Some(entry.entry_id),
                detail: Some(format!(
                    "Transfer of {} to beneficiary {}",
                    entry.amount, beneficiary.name
                )),
                origin,
            },
        )
        .await?;

        let completed = sqlx::query(
            "UPDATE ledger_entries SET status = $1 WHERE entry_id = $2 AND status = $3",
        )
        .bind(EntryStatus::Completed.id())
        .bind(entry.entry_id)
        .bind(EntryStatus::Pending.id())
        .execute(&mut *tx)
        .await?;
        if completed.rows_affected() == 0 {
            return Err(TransferError::Store(
                "entry left PENDING before completion".to_string(),
            ));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Flip the entry PENDING -> FAILED outside the aborted transaction
    ///
    /// Best effort: a failure here leaves the entry PENDING with no money
    /// moved, which reconciliation picks up via `find_pending`.
    async fn mark_failed(pool: &PgPool, entry: &LedgerEntry) {
        match LedgerRepository::update_status_if(
            pool,
            entry.entry_id,
            EntryStatus::Pending,
            EntryStatus::Failed,
        )
        .await
        {
            Ok(true) => {}
            Ok(false) => tracing::error!(
                reference = %entry.reference,
                "Entry no longer PENDING while marking failed"
            ),
            Err(e) => tracing::error!(
                reference = %entry.reference,
                error = %e,
                "Could not mark entry FAILED"
            ),
        }
    }
}

fn row_to_history_item(row: &PgRow) -> Result<HistoryItem, sqlx::Error> {
    let type_id: i16 = row.try_get("entry_type")?;
    let entry_type = EntryType::from_id(type_id).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "entry_type".into(),
        source: format!("unknown entry type id {type_id}").into(),
    })?;

    let status_id: i16 = row.try_get("status")?;
    let status = EntryStatus::from_id(status_id).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "status".into(),
        source: format!("unknown entry status id {status_id}").into(),
    })?;

    let dest_number: Option<String> = row.try_get("dest_number")?;
    let beneficiary_number: Option<String> = row.try_get("beneficiary_number")?;

    Ok(HistoryItem {
        reference: row.try_get("reference")?,
        from_account: row.try_get("source_number")?,
        counterpart_account: dest_number.or(beneficiary_number),
        counterpart_bank: row.try_get("beneficiary_bank")?,
        entry_type: entry_type.as_str().to_string(),
        amount: row.try_get("amount")?,
        currency: row.try_get("currency")?,
        status: status.as_str().to_string(),
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
    })
}
