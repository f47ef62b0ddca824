use crate::transaction_repo::TransactionRepo;
use std::sync::Arc;

mod transaction_repo;

pub fn create_repo() -> Arc<dyn TransactionRepo> {
    Arc::new(transaction_repo::MemTransactionRepo::new())
}
