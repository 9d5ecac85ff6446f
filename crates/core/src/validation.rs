//! Request shape validation.
//!
//! Inputs derive `validator::Validate`; this module turns the collected
//! violations into the field → message map reported to clients.

use std::borrow::Cow;

use splitter_shared::FieldErrors;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Rejects empty and whitespace-only strings.
///
/// # Errors
///
/// Returns a `blank` validation error when `value` has no visible characters.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Requires a present, well-formed email address.
///
/// A blank value is reported as missing only, never as malformed.
///
/// # Errors
///
/// Returns a `required` error for blank values and an `email` error for
/// values that are not addresses.
pub fn email_address(value: &str) -> Result<(), ValidationError> {
    if not_blank(value).is_err() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Email is required")));
    }
    if !value.validate_email() {
        return Err(
            ValidationError::new("email").with_message(Cow::Borrowed("Invalid email address")),
        );
    }
    Ok(())
}

/// Validates an input and collects one message per offending field.
///
/// # Errors
///
/// Returns the field → message map when any constraint is violated.
pub fn check<T: Validate>(input: &T) -> Result<(), FieldErrors> {
    input.validate().map_err(|errors| field_errors(&errors))
}

/// Flattens `validator` errors into wire field names and their first message.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations.first().map(|first| {
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| first.code.to_string(), ToString::to_string);
                (to_camel_case(&field), message)
            })
        })
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
