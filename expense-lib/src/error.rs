use crate::transaction::ValidationErrors;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use expense_repo::transaction_repo::TransactionRepoError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by handlers.
///
/// The `Display` output is for logs only. Responses carry a fixed message per kind, never the
/// underlying store error.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Transaction {0} not found")]
    NotFound(i64),
    #[error("Constraint violated: {0}")]
    Rejected(String),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl From<TransactionRepoError> for HandlerError {
    fn from(e: TransactionRepoError) -> Self {
        match e {
            TransactionRepoError::TransactionNotFound(id) => HandlerError::NotFound(id),
            TransactionRepoError::ConstraintViolation(message) => HandlerError::Rejected(message),
            TransactionRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::NotFound(_) => StatusCode::NOT_FOUND,
            HandlerError::Rejected(_) => StatusCode::BAD_REQUEST,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = match self {
            HandlerError::Validation(errors) => json!({
                "error": "Invalid transaction",
                "detail": errors.messages(),
            }),
            HandlerError::NotFound(_) => json!({ "message": "Transaction not found" }),
            HandlerError::Rejected(message) => {
                error!(%message, "Store rejected write");
                json!({ "error": "Transaction rejected by store constraints" })
            }
            HandlerError::Internal(e) => {
                error!(error = ?e, "Internal error");
                json!({ "error": "Internal server error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
