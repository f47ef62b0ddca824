use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, Summary, Transaction, TransactionRepo, TransactionRepoError, TransactionType,
};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    transactions: BTreeMap<i64, Transaction>,
    next_id: i64,
}

pub struct MemTransactionRepo {
    state: RwLock<State>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        // ids start at 1 like an AUTOINCREMENT column
        let state = State {
            transactions: BTreeMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.transactions.values().cloned().collect())
    }

    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let transaction = new_transaction.to_transaction(id);
        write_guard.transactions.insert(id, transaction.clone());

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<u64, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        match write_guard.transactions.entry(transaction_id) {
            Entry::Occupied(mut e) => {
                e.insert(updated_transaction.to_transaction(transaction_id));
                Ok(1)
            }
            Entry::Vacant(_) => Ok(0),
        }
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let removed = write_guard.transactions.remove(&transaction_id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn get_summary(&self) -> Result<Summary, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let (income, expense) =
            read_guard
                .transactions
                .values()
                .fold((0.0, 0.0), |(income, expense), t| match t.kind {
                    TransactionType::Income => (income + t.amount, expense),
                    TransactionType::Expense => (income, expense + t.amount),
                });

        Ok(Summary::new(income, expense))
    }
}
