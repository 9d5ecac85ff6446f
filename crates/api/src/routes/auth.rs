//! Authentication routes for registration and login.

use axum::{Json, Router, extract::State, routing::post};
use splitter_core::auth::Credentials;
use splitter_shared::{LoginResponse, RegisterResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// POST /auth/register - Create an account.
async fn register(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<Json<RegisterResponse>, ApiError> {
    state.auth_service().register(credentials).await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// POST /auth/login - Exchange credentials for a bearer token.
async fn login(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = state.auth_service().login(credentials).await?;
    Ok(Json(response))
}
