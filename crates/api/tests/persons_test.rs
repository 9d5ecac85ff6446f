//! Integration tests for person routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_person_crud() {
    let app = common::app().await;
    let token = common::login(&app).await;

    let id = common::create_person(&app, &token, "Alice", "alice@example.com").await;

    let (status, body) =
        common::send(&app, Method::GET, &format!("/api/persons/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert!(body["createdAt"].is_string());

    let (status, body) = common::send(
        &app,
        Method::PUT,
        &format!("/api/persons/{id}"),
        Some(&token),
        Some(json!({"name": "Alicia", "email": "alicia@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alicia");
    assert_eq!(body["email"], "alicia@example.com");

    let (status, body) = common::send(&app, Method::GET, "/api/persons", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/persons/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) =
        common::send(&app, Method::GET, &format!("/api/persons/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Person not found with id: {id}"));
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_duplicate_email_is_bad_request() {
    let app = common::app().await;
    let token = common::login(&app).await;
    common::create_person(&app, &token, "Alice", "alice@example.com").await;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/api/persons",
        Some(&token),
        Some(json!({"name": "Impostor", "email": "alice@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn test_person_validation_errors() {
    let app = common::app().await;
    let token = common::login(&app).await;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/api/persons",
        Some(&token),
        Some(json!({"name": "  ", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["name"], "Name is required");
    assert_eq!(body["errors"]["email"], "Invalid email address");
}

#[tokio::test]
async fn test_empty_email_is_required() {
    let app = common::app().await;
    let token = common::login(&app).await;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/api/persons",
        Some(&token),
        Some(json!({"name": "x", "email": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["email"], "Email is required");
    assert!(body["errors"].get("name").is_none());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = common::app().await;
    let token = common::login(&app).await;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/api/persons",
        Some(&token),
        Some(json!(42)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_unknown_person() {
    let app = common::app().await;
    let token = common::login(&app).await;

    let (status, body) =
        common::send(&app, Method::DELETE, "/api/persons/p-404", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Person not found with id: p-404");
}
