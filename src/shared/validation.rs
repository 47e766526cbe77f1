use chrono::{DateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for ISO-8601 date-time fields on stored records
    /// Seconds precision, optional milliseconds, optional UTC designator
    /// - Valid: "2025-03-01T08:30:00.000Z", "2025-03-01T08:30:00Z", "2025-03-01T08:30:00"
    /// - Invalid: "2025-03-01", "2025-03-01 08:30:00", "2025-03-01T08:30:00.5Z", "2025-03-01T08:30:00+02:00"
    pub static ref ISO_DATETIME_REGEX: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?Z?$").unwrap();
}

/// Run the validation rules of `value`, returning it untouched when every rule passes.
///
/// On failure every failing field is reported, not just the first one.
pub fn validated<T: Validate>(value: T) -> Result<T> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(errors) => Err(AppError::Validation(field_messages(&errors))),
    }
}

/// [`validated`] for records read back from storage.
///
/// A stored record that breaks its model's rules is a server fault, so the
/// failure surfaces as `Internal` (500) instead of `Validation` (400).
pub fn validated_record<T: Validate>(value: T) -> Result<T> {
    validated(value).map_err(|e| match e {
        AppError::Validation(fields) => AppError::Internal(format!(
            "Stored record failed validation: {}",
            fields.join("; ")
        )),
        other => other,
    })
}

/// Flatten validation errors into sorted `field: message` lines
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", error.code));
                    out.push(format!("{}: {}", field, message));
                }
            }
            // nested shapes are flattened on the wire, so their fields keep their own names
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}

/// Custom validator for hyphenated UUID strings
pub fn validate_uuid(value: &str) -> std::result::Result<(), ValidationError> {
    match Uuid::parse_str(value) {
        Ok(_) if value.len() == 36 => Ok(()),
        _ => Err(ValidationError::new("uuid").with_message("Invalid UUID".into())),
    }
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn to_iso_string(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
