
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::{HttpResponse, ResponseError};
use expense_repo::transaction_repo::TransactionRepo;
use std::sync::Arc;

pub mod config;
mod error;
pub mod tracing;
pub mod transaction;

/// Registers the store and every route on an actix app.
///
/// The store is injected here rather than looked up globally, so each app (and each test) can
/// run against its own instance.
pub fn app_config_func(
    transaction_repo: Arc<dyn TransactionRepo>,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(transaction_repo))
            .app_data(json_config())
            .service(transaction::transaction_service())
            .service(transaction::summary_service());
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        ::tracing::warn!(req_path = req.path(), %err, "Rejected request body");
        // Every variant keeps actix's status code but answers with a JSON body.
        let status = err.status_code();
        let error_body = serde_json::json!({
            "error": "Unable to parse JSON payload",
            "detail": err.to_string(),
        });
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::build(status).json(error_body),
        )
        .into()
    })
}
