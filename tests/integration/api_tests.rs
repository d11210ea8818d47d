//! Live API tests against running servers
//!
//! Start both binaries first, then run with: cargo test --test live_api -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const EXPENSE_URL: &str = "http://localhost:12000";
const LIBRARY_URL: &str = "http://localhost:11000";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_expense_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", EXPENSE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_library_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", LIBRARY_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_create_expense_and_read_statistics() {
    let client = Client::new();

    let response = client
        .post(format!("{}/expenses", EXPENSE_URL))
        .json(&json!({
            "amount": 4200,
            "category": "기타",
            "date": "2024-06-15",
            "description": "live test"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id in response");

    let stats: Value = client
        .get(format!("{}/statistics?month=6", EXPENSE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(stats["total"].as_f64().unwrap_or_default() >= 4200.0);

    let response = client
        .delete(format!("{}/expenses/{}", EXPENSE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_statistics_without_month() {
    let client = Client::new();

    let response = client
        .get(format!("{}/statistics", EXPENSE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return() {
    let client = Client::new();

    let book: Value = client
        .post(format!("{}/books", LIBRARY_URL))
        .json(&json!({"title": "Live", "author": "Test", "year": 2024}))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = book["id"].as_i64().expect("No id in response");

    let response = client
        .get(format!("{}/borrow/{}?user=alice", LIBRARY_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/borrow/{}?user=bob", LIBRARY_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = client
        .get(format!("{}/return/{}", LIBRARY_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["message"], "Book returned by alice");

    client
        .delete(format!("{}/books/{}", LIBRARY_URL, id))
        .send()
        .await
        .expect("Failed to send request");
}

#[tokio::test]
#[ignore]
async fn test_unknown_route() {
    let client = Client::new();

    let response = client
        .get(format!("{}/nowhere", LIBRARY_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
