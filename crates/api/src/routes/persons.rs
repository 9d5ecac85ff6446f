//! Person routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use splitter_core::person::{Person, PersonInput};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::AuthUser;

/// Creates the person routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/persons", post(create_person).get(list_persons))
        .route(
            "/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
}

/// POST /persons
async fn create_person(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<PersonInput>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user = user.username(), "creating person");
    let person = state.person_service().create(input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /persons
async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.person_service().list().await?))
}

/// GET /persons/{id}
async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.person_service().get(&id).await?))
}

/// PUT /persons/{id}
async fn update_person(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    AppJson(input): AppJson<PersonInput>,
) -> Result<Json<Person>, ApiError> {
    debug!(user = user.username(), person_id = %id, "updating person");
    Ok(Json(state.person_service().update(&id, input).await?))
}

/// DELETE /persons/{id}
async fn delete_person(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user = user.username(), person_id = %id, "deleting person");
    state.person_service().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
