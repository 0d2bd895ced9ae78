/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, and every failure path is
/// translated into a structured response at this boundary; nothing
/// propagates to the client as a raw fault.
///
/// Response shapes:
///
/// - `404 Not Found` carries no body.
/// - `400 Bad Request` carries human-readable text, embedding the
///   underlying store message except for update conflicts, which use a
///   fixed message that hides the detail.
/// - `422 Unprocessable Entity` carries a JSON list of failing fields.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contacts_data::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) with a caller-facing message
    BadRequest(String),

    /// Requested id does not exist (404, empty body)
    NotFound,

    /// Email already present among all contacts (400)
    DuplicateEmail(String),

    /// The store rejected an update: unknown id or a concurrently violated
    /// constraint (400, fixed message)
    UpdateRejected,

    /// Any other persistence failure (400, underlying message embedded)
    Store(String),

    /// Input failed field constraints (422)
    Validation(Vec<ValidationErrorDetail>),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Body of a 422 response
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Fixed error code ("validation_error")
    pub error: String,

    /// Human-readable summary
    pub message: String,

    /// Per-field failures
    pub details: Vec<ValidationErrorDetail>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::DuplicateEmail(email) => write!(f, "Duplicate email: {}", email),
            ApiError::UpdateRejected => write!(f, "Update rejected by the store"),
            ApiError::Store(msg) => write!(f, "Store failure: {}", msg),
            ApiError::Validation(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::DuplicateEmail(email) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Failed to create contact because email '{}' already exists.",
                    email
                ),
            )
                .into_response(),
            ApiError::UpdateRejected => (
                StatusCode::BAD_REQUEST,
                "Failed to update contact due to unique email issue or invalid Id".to_string(),
            )
                .into_response(),
            ApiError::Store(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Failed to get response : {}", msg),
            )
                .into_response(),
            ApiError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResponse {
                    error: "validation_error".to_string(),
                    message: "Request validation failed".to_string(),
                    details,
                }),
            )
                .into_response(),
        }
    }
}

/// Convert store errors to API errors
///
/// Failures are logged here, before translation, so every handler gets the
/// same treatment.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store operation failed");
        match err {
            StoreError::UpdateConflict(_) => ApiError::UpdateRejected,
            StoreError::Database(cause) => ApiError::Store(cause.to_string()),
        }
    }
}

/// Convert validator failures to API errors
///
/// Collects every failing field so the client sees the full list at once.
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationErrorDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();
        ApiError::Validation(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::DuplicateEmail("ann@x.com".to_string());
        assert_eq!(err.to_string(), "Duplicate email: ann@x.com");
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::UpdateConflict("no row".to_string()));
        assert!(matches!(err, ApiError::UpdateRejected));

        let err = ApiError::from(StoreError::Database(sqlx::Error::PoolClosed));
        assert!(matches!(err, ApiError::Store(_)));
    }

    #[test]
    fn test_validation_error_collects_all_fields() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "first is required"))]
            first: String,
            #[validate(length(min = 1, message = "second is required"))]
            second: String,
        }

        let probe = Probe {
            first: String::new(),
            second: String::new(),
        };

        let err = ApiError::from(probe.validate().unwrap_err());
        match err {
            ApiError::Validation(details) => assert_eq!(details.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
