use serde_json::json;
use turnkey_axum::{ErrorResponse, routes::authenticate::AuthenticateResponseBody};

use crate::helpers::TestApp;

async fn app_with_ana() -> TestApp {
    let app = TestApp::new().await;
    let response = app
        .post_accounts(&json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "secret123",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    app
}

#[tokio::test]
async fn should_return_201_with_access_token_if_credentials_are_valid() {
    let app = app_with_ana().await;

    let response = app
        .post_sessions(&json!({ "email": "ana@x.com", "password": "secret123" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: AuthenticateResponseBody = response.json().await.unwrap();
    assert_eq!(body.access_token.split('.').count(), 3);
}

#[tokio::test]
async fn should_return_401_if_password_is_wrong() {
    let app = app_with_ana().await;

    let response = app
        .post_sessions(&json!({ "email": "ana@x.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Credentials are not valid.");
}

#[tokio::test]
async fn should_return_same_401_for_unknown_email_and_wrong_password() {
    let app = app_with_ana().await;

    let unknown = app
        .post_sessions(&json!({ "email": "nobody@x.com", "password": "anything" }))
        .await;
    let mismatch = app
        .post_sessions(&json!({ "email": "ana@x.com", "password": "anything" }))
        .await;

    assert_eq!(unknown.status(), mismatch.status());
    assert_eq!(unknown.text().await.unwrap(), mismatch.text().await.unwrap());
    assert_eq!(app.owners_repository.len().await, 1);
}

#[tokio::test]
async fn should_return_400_if_email_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .post_sessions(&json!({ "email": "nobody", "password": "anything" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_401_if_password_is_empty() {
    let app = app_with_ana().await;

    let response = app
        .post_sessions(&json!({ "email": "ana@x.com", "password": "" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Credentials are not valid.");
}
