use crate::sqlx_repo::{map_write_error, SQLxRepo};
use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, Summary, Transaction, TransactionRepo, TransactionRepoError, TransactionType,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{query, query_as};
use tracing::{instrument, warn};

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
    category: Option<String>,
    amount: f64,
    date: NaiveDate,
    description: Option<String>,
}

impl TryFrom<TransactionEntry> for Transaction {
    type Error = anyhow::Error;

    fn try_from(value: TransactionEntry) -> Result<Self, Self::Error> {
        let kind: TransactionType = value
            .kind
            .parse()
            .with_context(|| format!("Transaction {} has an invalid type", value.id))?;
        Ok(Transaction::new(
            value.id,
            kind,
            value.category,
            value.amount,
            value.date,
            value.description,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct TypeTotal {
    #[sqlx(rename = "type")]
    kind: String,
    total: Option<f64>,
}

impl SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction_entry(
        &self,
        transaction_id: i64,
    ) -> Result<Option<TransactionEntry>, TransactionRepoError> {
        let transaction_entry: Option<TransactionEntry> = query_as(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = ?",
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        Ok(transaction_entry)
    }

    #[instrument(skip(self))]
    async fn get_transaction_entries(&self) -> Result<Vec<TransactionEntry>, TransactionRepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as(
            "SELECT id, type, category, amount, date, description FROM transactions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to get transactions")?;
        Ok(transaction_entries)
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let entry = self
            .get_transaction_entry(transaction_id)
            .await?
            .ok_or(TransactionNotFound(transaction_id))?;
        Ok(Transaction::try_from(entry)?)
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transactions = self
            .get_transaction_entries()
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<Transaction>, anyhow::Error>>()?;
        Ok(transactions)
    }

    #[instrument(skip(self, new_transaction))]
    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let result = query(
            "INSERT INTO transactions(type, category, amount, date, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_transaction.kind.as_str())
        .bind(new_transaction.category.as_deref())
        .bind(new_transaction.amount)
        .bind(new_transaction.date)
        .bind(new_transaction.description.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Unable to insert transaction".to_owned()))?;

        Ok(new_transaction.to_transaction(result.last_insert_rowid()))
    }

    #[instrument(skip(self, updated_transaction))]
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<u64, TransactionRepoError> {
        let result = query(
            "UPDATE transactions SET type = ?, category = ?, amount = ?, date = ?, description = ? WHERE id = ?",
        )
        .bind(updated_transaction.kind.as_str())
        .bind(updated_transaction.category.as_deref())
        .bind(updated_transaction.amount)
        .bind(updated_transaction.date)
        .bind(updated_transaction.description.as_deref())
        .bind(transaction_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, format!("Unable to update transaction {}", transaction_id)))?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, TransactionRepoError> {
        let result = query("DELETE FROM transactions WHERE id = ?")
            .bind(transaction_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn get_summary(&self) -> Result<Summary, TransactionRepoError> {
        let totals: Vec<TypeTotal> =
            query_as("SELECT type, SUM(amount) AS total FROM transactions GROUP BY type")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get summary")?;

        let mut income = 0.0;
        let mut expense = 0.0;
        for t in totals {
            match t.kind.parse() {
                Ok(TransactionType::Income) => income = t.total.unwrap_or(0.0),
                Ok(TransactionType::Expense) => expense = t.total.unwrap_or(0.0),
                Err(e) => warn!(%e, "Ignoring unrecognised group in summary"),
            }
        }

        Ok(Summary::new(income, expense))
    }
}
