// Input validation for activity APIs
//
// Last-resort size limits to guard the directory from abuse. Email format is
// deliberately not validated: matching is exact and case-sensitive.

use super::common::ApiError;

// =============================================================================
// Input Size Limits
// =============================================================================

/// Maximum size for an activity name in a request path.
pub const MAX_ACTIVITY_NAME_BYTES: usize = 256;

/// Maximum size for a participant email.
/// 320 bytes is the longest address RFC 3696 allows (64 local + 1 + 255 domain).
pub const MAX_EMAIL_BYTES: usize = 320;

/// Generic validation error message returned to clients.
/// Intentionally vague to avoid leaking which field exceeded limits.
pub const VALIDATION_ERROR_MESSAGE: &str = "Input exceeds allowed limits";

// =============================================================================
// Validation Functions
// =============================================================================

/// Validation error - returns generic message to avoid leaking details
#[derive(Debug)]
pub struct ValidationError;

impl From<ValidationError> for ApiError {
    fn from(_: ValidationError) -> Self {
        ApiError::bad_request(VALIDATION_ERROR_MESSAGE)
    }
}

/// Validate activity name size
pub fn validate_activity_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_ACTIVITY_NAME_BYTES {
        tracing::warn!(
            "Activity name exceeds limit: {} bytes (max: {})",
            name.len(),
            MAX_ACTIVITY_NAME_BYTES
        );
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate email size
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > MAX_EMAIL_BYTES {
        tracing::warn!(
            "Email exceeds limit: {} bytes (max: {})",
            email.len(),
            MAX_EMAIL_BYTES
        );
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate both inputs of a roster mutation
pub fn validate_roster_input(activity_name: &str, email: &str) -> Result<(), ValidationError> {
    validate_activity_name(activity_name)?;
    validate_email(email)?;
    Ok(())
}
