use rstest::rstest;

use super::*;
use crate::error::FieldErrors;

#[rstest]
#[case(AppError::Unauthorized("test".into()), "UNAUTHORIZED")]
#[case(AppError::NotFound("test".into()), "NOT_FOUND")]
#[case(AppError::Validation(FieldErrors::new()), "VALIDATION_ERROR")]
#[case(AppError::BadRequest("test".into()), "BAD_REQUEST")]
#[case(AppError::Conflict("test".into()), "CONFLICT")]
#[case(AppError::Database("test".into()), "DATABASE_ERROR")]
#[case(AppError::Internal("test".into()), "INTERNAL_ERROR")]
fn test_app_error_error_codes(#[case] err: AppError, #[case] code: &str) {
    assert_eq!(err.error_code(), code);
}

#[rstest]
#[case(AppError::Unauthorized("msg".into()), "Authentication failed: msg")]
#[case(AppError::NotFound("msg".into()), "Not found: msg")]
#[case(AppError::Validation(FieldErrors::new()), "Validation failed")]
#[case(AppError::BadRequest("msg".into()), "Bad request: msg")]
#[case(AppError::Conflict("msg".into()), "Conflict: msg")]
#[case(AppError::Database("msg".into()), "Database error: msg")]
#[case(AppError::Internal("msg".into()), "Internal error: msg")]
fn test_app_error_display(#[case] err: AppError, #[case] display: &str) {
    assert_eq!(format!("{err}"), display);
}

#[test]
fn test_field_errors_only_on_validation() {
    assert!(AppError::Conflict("Email already exists".into())
        .field_errors()
        .is_none());

    let mut errors = FieldErrors::new();
    errors.insert("amount".into(), "Amount must be positive".into());
    let err = AppError::Validation(errors);

    assert_eq!(
        err.field_errors().and_then(|e| e.get("amount")).map(String::as_str),
        Some("Amount must be positive")
    );
}
