mod transaction_repo;

use crate::transaction_repo::{TransactionRepo, TransactionRepoError};
use anyhow::Context;
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{query, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
    CREATE TABLE transactions (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        type        TEXT NOT NULL CHECK(type IN ('income', 'expense')),
        category    TEXT,
        amount      REAL NOT NULL,
        date        TEXT NOT NULL,
        description TEXT
    )
"#;

const CREATE_CATEGORIES_TABLE: &str = r#"
    CREATE TABLE categories (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        type TEXT CHECK(type IN ('income', 'expense'))
    )
"#;

pub struct SQLxRepo {
    pool: Pool<Sqlite>,
}

impl SQLxRepo {
    /// Opens a fresh in-memory database and creates its schema.
    ///
    /// An in-memory database only exists while a connection to it is open, so the pool holds one
    /// connection that is never reaped or recycled. Dropping the pool discards all data.
    pub async fn connect() -> Result<SQLxRepo, anyhow::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid sqlite connection options")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Unable to open in-memory database")?;

        query(CREATE_TRANSACTIONS_TABLE)
            .execute(&pool)
            .await
            .context("Unable to create transactions table")?;
        query(CREATE_CATEGORIES_TABLE)
            .execute(&pool)
            .await
            .context("Unable to create categories table")?;
        info!("Created in-memory schema");

        Ok(SQLxRepo { pool })
    }
}

pub async fn create_repo() -> Result<Arc<dyn TransactionRepo>, anyhow::Error> {
    let repo = SQLxRepo::connect().await?;
    Ok(Arc::new(repo))
}

/// Constraint failures are the caller's fault, everything else is ours.
fn map_write_error(err: sqlx::Error, context: String) -> TransactionRepoError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(
            db_err.kind(),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation
        ) {
            return TransactionRepoError::ConstraintViolation(db_err.message().to_owned());
        }
    }
    TransactionRepoError::Other(anyhow::Error::new(err).context(context))
}
