use serde_json::{Value, json};
use turnkey_axum::ErrorResponse;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_accounts(&json!({
            "name": "Ana",
            "email": "Ana@X.com",
            "password": "secret123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["owner"]["name"], "Ana");
    assert_eq!(body["owner"]["email"], "ana@x.com");
    assert!(body["owner"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["owner"].get("password").is_none());
    assert_eq!(app.owners_repository.len().await, 1);
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let body = json!({
        "name": "Ana",
        "email": "ana@x.com",
        "password": "secret123",
    });

    assert_eq!(app.post_accounts(&body).await.status().as_u16(), 201);

    let response = app.post_accounts(&body).await;
    assert_eq!(response.status().as_u16(), 409);

    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Owner with email \"ana@x.com\" already exists.");
    assert_eq!(app.owners_repository.len().await, 1);
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "name": "Ana", "email": "not-an-email", "password": "secret123" }),
        json!({ "name": "   ", "email": "ana@x.com", "password": "secret123" }),
        json!({ "name": "Ana", "email": "ana@x.com", "password": "" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_accounts(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }

    assert!(app.owners_repository.is_empty().await);
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app.post_accounts(&json!({ "email": "ana@x.com" })).await;

    assert_eq!(response.status().as_u16(), 422);
}
