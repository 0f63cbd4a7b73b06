//! API integration tests
//!
//! Require a running proxy (and live Agoda connectivity for the search
//! cases). Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_search_with_defaults() {
    let client = Client::new();

    let response = client
        .get(format!("{}/hotels/search", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["hotels"].is_array());
    assert_eq!(body["count"], body["hotels"].as_array().unwrap().len());
    assert_eq!(body["searchParams"]["city"], 9395);
}

#[tokio::test]
#[ignore]
async fn test_search_invalid_date() {
    let client = Client::new();

    let response = client
        .get(format!("{}/hotels/search?checkin=2025-13-40", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid date format"));
}

#[tokio::test]
#[ignore]
async fn test_search_rejects_post() {
    let client = Client::new();

    let response = client
        .post(format!("{}/hotels/search", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 405);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Method not allowed");
}
