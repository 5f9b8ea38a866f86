// ============================================================================
// Application Errors
// ============================================================================
//
// Two-tier failure model:
// - BusinessError: typed, recoverable, user-facing failures (validation,
//   admission rejections). Serialized as a "fail" envelope with the status
//   the error carries.
// - Everything else: unexpected failures. Logged with full detail
//   server-side under a correlation id; the client sees only the correlation
//   id and the top-level message, never a stack trace or internal type.
//
// The IntoResponse impl below is the single translation point between
// errors and the wire format.
//
// ============================================================================

use axum::{http::StatusCode, response::IntoResponse, Json};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use crate::envelope::Envelope;

pub type AppResult<T> = Result<T, AppError>;

/// Structured, user-facing failure
///
/// `messages` maps a field name to one message; multiple violations of the
/// same field are joined with `|` by the validator before they get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessError {
    pub messages: BTreeMap<String, String>,
    pub status: StatusCode,
}

impl BusinessError {
    /// Field-level validation failure, bad-request by default
    pub fn fields(messages: BTreeMap<String, String>) -> Self {
        Self {
            messages,
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Single-message failure under the "message" key
    pub fn message(text: impl Into<String>, status: StatusCode) -> Self {
        let mut messages = BTreeMap::new();
        messages.insert("message".to_string(), text.into());
        Self { messages, status }
    }

    /// Admission rejection (HTTP 401)
    pub fn unauthorized(text: impl Into<String>) -> Self {
        Self::message(text, StatusCode::UNAUTHORIZED)
    }

    /// Malformed request body or query string (HTTP 400)
    pub fn bad_request(field: impl Into<String>, text: impl Into<String>) -> Self {
        let mut messages = BTreeMap::new();
        messages.insert(field.into(), text.into());
        Self {
            messages,
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for BusinessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .messages
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

/// Application error type covering every failure a handler can produce
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Business(BusinessError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<BusinessError> for AppError {
    fn from(err: BusinessError) -> Self {
        AppError::Business(err)
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Business(err) => err.status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Business(err) => {
                if err.status == StatusCode::UNAUTHORIZED {
                    tracing::warn!(messages = %err, "Admission rejected");
                } else {
                    tracing::debug!(
                        messages = %err,
                        status = %err.status.as_u16(),
                        "Business rule failed"
                    );
                }
                (err.status, Json(Envelope::fail(&err.messages))).into_response()
            }
            other => {
                let correlation_id = Uuid::new_v4();
                // Debug formatting keeps the full anyhow chain in the server log
                tracing::error!(
                    correlation_id = %correlation_id,
                    error = ?other,
                    "Unexpected failure"
                );
                let message = format!("Unexpected error: {}: {}", correlation_id, other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Envelope::error(message)),
                )
                    .into_response()
            }
        }
    }
}
