//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body whose parse failures are reported as `400` error bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
