use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transaction(&self, transaction_id: i64)
        -> Result<Transaction, TransactionRepoError>;

    /// Returns every transaction in storage order.
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Overwrites every field of the transaction and returns the number of rows changed.
    /// A missing id is not an error, the count is simply 0.
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<u64, TransactionRepoError>;

    /// Returns the number of rows removed, 0 if the id did not exist.
    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, TransactionRepoError>;

    async fn get_summary(&self) -> Result<Summary, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(UnknownTransactionType(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl Transaction {
    pub const fn new(
        id: i64,
        kind: TransactionType,
        category: Option<String>,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Transaction {
        Transaction {
            id,
            kind,
            category,
            amount,
            date,
            description,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl NewTransaction {
    pub const fn new(
        kind: TransactionType,
        category: Option<String>,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> NewTransaction {
        NewTransaction {
            kind,
            category,
            amount,
            date,
            description,
        }
    }

    pub fn to_transaction(self, id: i64) -> Transaction {
        Transaction::new(
            id,
            self.kind,
            self.category,
            self.amount,
            self.date,
            self.description,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl Summary {
    pub fn new(income: f64, expense: f64) -> Summary {
        Summary {
            income,
            expense,
            balance: income - expense,
        }
    }
}
