use std::sync::Arc;

use expense_repo::transaction_repo::TransactionRepo;
use rstest::*;
use serde_json::{json, Value};
use tracing::info;
use tracing::Level;

macro_rules! build_app {
    ($transaction_repo:expr) => {{
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func($transaction_repo));
        tracing::info!("Built app");
        app
    }};
}

/// Posts the payload and returns the id of the created transaction.
macro_rules! create_transaction {
    (&$service:ident, $payload:expr) => {{
        let request = TestRequest::post()
            .uri("/transactions")
            .set_json(&$payload)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::CREATED,
            "Got {} response when creating transaction",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        body["id"].as_i64().expect("id in response")
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn transaction_repo() -> Arc<dyn TransactionRepo> {
    expense_repo::mem_repo::create_repo()
}

#[allow(dead_code)]
pub fn payload(kind: &str, amount: f64, date: &str) -> Value {
    json!({
        "type": kind,
        "category": "Misc",
        "amount": amount,
        "date": date,
        "description": "Test transaction",
    })
}
