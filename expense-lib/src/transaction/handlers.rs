use crate::error::HandlerError;
use crate::transaction::TransactionPayload;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use expense_repo::transaction_repo::TransactionRepo;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;

#[derive(Serialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Serialize)]
struct UpdatedResponse {
    #[serde(rename = "updatedID")]
    updated_id: u64,
}

#[derive(Serialize)]
struct DeletedResponse {
    #[serde(rename = "deletedID")]
    deleted_id: u64,
}

#[post("")]
pub async fn create_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    payload: web::Json<TransactionPayload>,
) -> Result<impl Responder, HandlerError> {
    let new_transaction = payload.into_inner().validate()?;
    let transaction = transaction_repo.create_transaction(new_transaction).await?;
    info!(transaction_id = transaction.id, "Created transaction");
    Ok(HttpResponse::Created().json(CreatedResponse { id: transaction.id }))
}

#[get("")]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo.get_all_transactions().await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[get("/{transaction_id}")]
pub async fn get_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    let transaction = transaction_repo.get_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    payload: web::Json<TransactionPayload>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    let updated_transaction = payload.into_inner().validate()?;
    let updated_id = transaction_repo
        .update_transaction(transaction_id, updated_transaction)
        .await?;
    info!(changed = updated_id, "Updated transaction");
    Ok(HttpResponse::Ok().json(UpdatedResponse { updated_id }))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    let deleted_id = transaction_repo.delete_transaction(transaction_id).await?;
    info!(changed = deleted_id, "Deleted transaction");
    Ok(HttpResponse::Ok().json(DeletedResponse { deleted_id }))
}

#[get("")]
pub async fn get_summary(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let summary = transaction_repo.get_summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}
