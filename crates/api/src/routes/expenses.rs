//! Expense and balance routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use splitter_core::balance::{Balances, Summary};
use splitter_core::expense::{ExpenseDetails, ExpenseInput};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::AuthUser;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense).get(list_expenses))
        .route("/expenses/summary", get(summary))
        .route("/expenses/balances", get(balances))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

/// POST /expenses
async fn create_expense(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ExpenseInput>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(user = user.username(), "creating expense");
    let expense = state.expense_service().create(input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses
async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseDetails>>, ApiError> {
    Ok(Json(state.expense_service().list().await?))
}

/// GET /expenses/{id}
async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseDetails>, ApiError> {
    Ok(Json(state.expense_service().get(&id).await?))
}

/// PUT /expenses/{id}
async fn update_expense(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    AppJson(input): AppJson<ExpenseInput>,
) -> Result<Json<ExpenseDetails>, ApiError> {
    debug!(user = user.username(), expense_id = %id, "updating expense");
    Ok(Json(state.expense_service().update(&id, input).await?))
}

/// DELETE /expenses/{id}
async fn delete_expense(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user = user.username(), expense_id = %id, "deleting expense");
    state.expense_service().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /expenses/summary - Rounded balances of current persons.
async fn summary(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    Ok(Json(state.balance_service().summary().await?))
}

/// GET /expenses/balances - Raw balances, deleted persons included.
async fn balances(State(state): State<AppState>) -> Result<Json<Balances>, ApiError> {
    Ok(Json(state.balance_service().balances().await?))
}
