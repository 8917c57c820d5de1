//! HTTP error types and their JSON response bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bloodstream_core::{IntakeError, IntakeField, StorageError, SubmitError};
use serde::Serialize;
use thiserror::Error;

/// Axum-facing error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submission failed the intake contract.
    #[error("{0}")]
    Invalid(IntakeError),

    /// Request body could not be read as an intake submission.
    #[error("Malformed request body: {message}")]
    Malformed { status: StatusCode, message: String },

    /// Internal server error. The message is safe to show to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<IntakeField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Malformed { status, .. } => *status,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            HttpError::Invalid(e) => ErrorBody {
                error: e.to_string(),
                status: status.as_u16(),
                error_type: Some(match e {
                    IntakeError::MissingField(_) => "MISSING_FIELD",
                    IntakeError::InvalidFormat(..) => "INVALID_FORMAT",
                }),
                field: Some(e.field()),
                expected: e.expected().map(|format| format.to_string()),
            },
            HttpError::Malformed { message, .. } => ErrorBody {
                error: message.clone(),
                status: status.as_u16(),
                error_type: Some("MALFORMED_BODY"),
                field: None,
                expected: None,
            },
            HttpError::NotFound(msg) | HttpError::Internal(msg) => ErrorBody {
                error: msg.clone(),
                status: status.as_u16(),
                error_type: None,
                field: None,
                expected: None,
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<IntakeError> for HttpError {
    fn from(err: IntakeError) -> Self {
        HttpError::Invalid(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!(error = %err, "Patient store task failed");
        HttpError::Internal("Patient store is unavailable".to_string())
    }
}

impl From<StorageError> for HttpError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Patient store failure");
        HttpError::Internal("Patient store is unavailable".to_string())
    }
}

impl From<SubmitError> for HttpError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(e) => HttpError::Invalid(e),
            // Already logged by the intake service
            SubmitError::Storage(_) => {
                HttpError::Internal("Failed to save patient record".to_string())
            }
        }
    }
}
