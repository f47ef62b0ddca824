use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use actix_web::App;
use expense_repo::transaction_repo::{Summary, Transaction};
use rstest::rstest;
use serde_json::{json, Value};

use utils::payload;
use utils::tracing_setup;

#[macro_use]
mod utils;

#[rstest]
#[actix_rt::test]
async fn test_crud_round_trip(_tracing_setup: &()) {
    let transaction_repo = expense_repo::sqlx_repo::create_repo().await.unwrap();
    let app = build_app!(transaction_repo);
    let service = test::init_service(app).await;

    let income = create_transaction!(&service, payload("income", 100.0, "2024-06-01"));
    let expense = create_transaction!(&service, payload("expense", 40.0, "2024-06-02"));
    assert_ne!(income, expense);

    let request = TestRequest::get()
        .uri(format!("/transactions/{}", expense).as_str())
        .to_request();
    let transaction: Transaction = test::call_and_read_body_json(&service, request).await;
    assert_eq!(transaction.amount, 40.0);
    assert_eq!(transaction.date.to_string(), "2024-06-02");

    let request = TestRequest::get().uri("/summary").to_request();
    let summary: Summary = test::call_and_read_body_json(&service, request).await;
    assert_eq!(summary, Summary::new(100.0, 40.0));

    let request = TestRequest::put()
        .uri("/transactions/999")
        .set_json(payload("expense", 1.0, "2024-06-03"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, request).await;
    assert_eq!(body, json!({ "updatedID": 0 }));

    let request = TestRequest::delete()
        .uri(format!("/transactions/{}", income).as_str())
        .to_request();
    let body: Value = test::call_and_read_body_json(&service, request).await;
    assert_eq!(body, json!({ "deletedID": 1 }));

    let request = TestRequest::get()
        .uri(format!("/transactions/{}", income).as_str())
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get().uri("/transactions").to_request();
    let transactions: Vec<Transaction> = test::call_and_read_body_json(&service, request).await;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, expense);
}

#[rstest]
#[actix_rt::test]
async fn test_invalid_type_never_reaches_store(_tracing_setup: &()) {
    let transaction_repo = expense_repo::sqlx_repo::create_repo().await.unwrap();
    let app = build_app!(transaction_repo);
    let service = test::init_service(app).await;

    let request = TestRequest::post()
        .uri("/transactions")
        .set_json(payload("savings", 20.0, "2024-06-01"))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = TestRequest::get().uri("/transactions").to_request();
    let body: Value = test::call_and_read_body_json(&service, request).await;
    assert_eq!(body, json!([]));
}
