//! Router fixtures for API integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use splitter_api::{AppState, create_router};
use splitter_db::migration::{Migrator, MigratorTrait};
use splitter_shared::config::CorsConfig;
use splitter_shared::{JwtConfig, JwtService};
use tower::ServiceExt;

pub const SECRET: &str = "api-test-secret";

/// Router over a fresh in-memory database.
pub async fn app() -> Router {
    app_with_cors(&CorsConfig::default()).await
}

/// Same as [`app`] with explicit CORS settings.
pub async fn app_with_cors(cors: &CorsConfig) -> Router {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    let jwt = JwtService::new(JwtConfig {
        secret: SECRET.to_string(),
        access_token_expires_secs: 3600,
    });

    create_router(AppState::new(db, jwt), cors)
}

/// Sends a request and returns the status with the JSON body (`Null` if empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, json)
}

/// Registers and logs in a user, returning the bearer token.
pub async fn login(app: &Router) -> String {
    let credentials = json!({"username": "alice", "password": "wonderland"});
    let (status, _) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(credentials.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, Method::POST, "/api/auth/login", None, Some(credentials)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

/// Creates a person and returns its id.
pub async fn create_person(app: &Router, token: &str, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/persons",
        Some(token),
        Some(json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}
