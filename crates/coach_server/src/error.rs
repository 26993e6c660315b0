//! Custom error types for the coach service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Service errors, classified once at the HTTP boundary. Nothing leaves a
/// handler unclassified.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("speech synthesis failed: {0}")]
    Speech(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CoachError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoachError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<String> for CoachError {
    fn from(err: String) -> Self {
        CoachError::Internal(err)
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for CoachError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CoachError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: "validation_failed".to_string(),
                    message,
                    field: Some(field),
                },
            ),
            CoachError::Speech(message) => {
                tracing::error!("speech synthesis failed: {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError {
                        error: "speech_failed".to_string(),
                        message,
                        field: None,
                    },
                )
            }
            CoachError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: "internal_error".to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for coach operations.
pub type CoachResult<T> = Result<T, CoachError>;
