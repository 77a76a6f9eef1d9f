//! PostgreSQL schema for the banking core
//!
//! Four tables: accounts, beneficiaries, ledger_entries, audit_log.
//! Account numbers and ledger references carry unique indexes; both are
//! relied on by the uniqueness guarantees in the account and ledger modules.

use sqlx::PgPool;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    account_id       BIGSERIAL PRIMARY KEY,
    owner_id         BIGINT NOT NULL,
    account_number   TEXT NOT NULL,
    kind             SMALLINT NOT NULL,
    balance          NUMERIC(15, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
    interest_rate    NUMERIC(5, 2) NOT NULL DEFAULT 0,
    is_active        BOOLEAN NOT NULL DEFAULT TRUE,
    opened_at        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    last_activity_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_BENEFICIARIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS beneficiaries (
    beneficiary_id     BIGSERIAL PRIMARY KEY,
    owner_id           BIGINT NOT NULL,
    name               TEXT NOT NULL,
    bank_name          TEXT NOT NULL,
    account_number     TEXT NOT NULL,
    routing_code       TEXT,
    max_transfer_limit NUMERIC(15, 2),
    relationship       TEXT,
    is_active          BOOLEAN NOT NULL DEFAULT TRUE,
    created_at         TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at         TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_LEDGER_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ledger_entries (
    entry_id       BIGSERIAL PRIMARY KEY,
    reference      UUID NOT NULL,
    account_id     BIGINT,
    to_account_id  BIGINT,
    beneficiary_id BIGINT,
    entry_type     SMALLINT NOT NULL,
    amount         NUMERIC(15, 2) NOT NULL CHECK (amount > 0),
    currency       TEXT NOT NULL DEFAULT 'USD',
    status         SMALLINT NOT NULL,
    description    TEXT,
    created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_AUDIT_LOG_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS audit_log (
    log_id     BIGSERIAL PRIMARY KEY,
    user_id    BIGINT NOT NULL,
    action     TEXT NOT NULL,
    entity     TEXT NOT NULL,
    entity_id  BIGINT,
    detail     TEXT,
    origin     TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS accounts_number_key ON accounts (account_number)",
    "CREATE INDEX IF NOT EXISTS accounts_owner_idx ON accounts (owner_id)",
    "CREATE INDEX IF NOT EXISTS beneficiaries_owner_idx ON beneficiaries (owner_id)",
    "CREATE UNIQUE INDEX IF NOT EXISTS ledger_entries_reference_key ON ledger_entries (reference)",
    "CREATE INDEX IF NOT EXISTS ledger_entries_account_idx ON ledger_entries (account_id)",
    "CREATE INDEX IF NOT EXISTS ledger_entries_to_account_idx ON ledger_entries (to_account_id)",
    "CREATE INDEX IF NOT EXISTS audit_log_entity_idx ON audit_log (entity, entity_id)",
];

/// Create tables and indexes if absent
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing PostgreSQL schema");

    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_BENEFICIARIES_TABLE).execute(pool).await?;
    sqlx::query(CREATE_LEDGER_ENTRIES_TABLE).execute(pool).await?;
    sqlx::query(CREATE_AUDIT_LOG_TABLE).execute(pool).await?;

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
