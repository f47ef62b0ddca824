pub mod generator;

use expense_repo::transaction_repo::TransactionRepo;
use std::sync::Arc;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Every call returns an empty, isolated store.
pub async fn build_repo(repo_type: RepoType) -> Arc<dyn TransactionRepo> {
    match repo_type {
        RepoType::SQLx => expense_repo::sqlx_repo::create_repo().await.unwrap(),
        RepoType::Mem => expense_repo::mem_repo::create_repo(),
    }
}
