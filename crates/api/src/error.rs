//! Error responses.
//!
//! Every failure leaves the API as
//! `{timestamp, status, error, message, errors?}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use splitter_core::auth::AuthError;
use splitter_core::expense::ExpenseError;
use splitter_core::person::PersonError;
use splitter_core::store::StoreError;
use splitter_shared::{AppError, FieldErrors};
use tracing::error;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Per-field messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Builds an error response with the standard body.
pub(crate) fn error_response(
    status: StatusCode,
    code: &str,
    message: String,
    errors: Option<FieldErrors>,
) -> Response {
    let body = ErrorBody {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: code.to_string(),
        message,
        errors,
    };
    (status, Json(body)).into_response()
}

/// Handler error, rendered through [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %err, "request failed");
        }

        error_response(
            status,
            err.error_code(),
            err.public_message(),
            err.field_errors().cloned(),
        )
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<PersonError> for ApiError {
    fn from(err: PersonError) -> Self {
        Self(err.into())
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        Self(err.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::BadRequest(rejection.body_text()))
    }
}
