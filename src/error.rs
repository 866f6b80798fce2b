//! HTTP-facing error type.
//!
//! [`AppError`] turns registry failures and request rejections into a JSON body
//! of the form:
//!
//! ```json
//! { "error": { "code": "shortcode_taken", "message": "...", "details": { "code": "abcd" } } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::errors::RegistryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Gone { message: String, details: Value },
    #[error("{message}")]
    Internal {
        code: &'static str,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code: "validation_error",
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { code, details, .. } => (*code, details.clone()),
            AppError::NotFound { details, .. } => ("not_found", details.clone()),
            AppError::Conflict { details, .. } => ("shortcode_taken", details.clone()),
            AppError::Gone { details, .. } => ("gone", details.clone()),
            AppError::Internal { code, details, .. } => (*code, details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        let message = err.to_string();
        match err {
            RegistryError::InvalidUrl | RegistryError::InvalidValidity => Self::Validation {
                code: err.kind(),
                message,
                details: json!({}),
            },
            RegistryError::InvalidShortcode { ref reason } => Self::Validation {
                code: err.kind(),
                message,
                details: json!({ "reason": reason }),
            },
            RegistryError::ShortcodeTaken { code } => Self::Conflict {
                message,
                details: json!({ "code": code }),
            },
            RegistryError::NotFound { code } => Self::NotFound {
                message,
                details: json!({ "code": code }),
            },
            RegistryError::Gone { code } => Self::Gone {
                message,
                details: json!({ "code": code }),
            },
            RegistryError::CodeGenerationExhausted { attempts } => Self::Internal {
                code: "code_generation_exhausted",
                message,
                details: json!({ "attempts": attempts }),
            },
            RegistryError::Internal(reason) => {
                tracing::error!(%reason, "Registry internal error");
                Self::internal("Internal server error", json!({}))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_errors_map_to_status_codes() {
        let cases = [
            (RegistryError::InvalidUrl, StatusCode::BAD_REQUEST),
            (
                RegistryError::invalid_shortcode("too short"),
                StatusCode::BAD_REQUEST,
            ),
            (RegistryError::InvalidValidity, StatusCode::BAD_REQUEST),
            (
                RegistryError::ShortcodeTaken {
                    code: "abcd".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RegistryError::CodeGenerationExhausted { attempts: 10 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (RegistryError::not_found("abcd"), StatusCode::NOT_FOUND),
            (RegistryError::gone("abcd"), StatusCode::GONE),
            (
                RegistryError::Internal("clock".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::from(RegistryError::InvalidValidity).to_error_info();
        assert_eq!(info.code, "invalid_validity");

        let info = AppError::from(RegistryError::ShortcodeTaken {
            code: "abcd".to_string(),
        })
        .to_error_info();
        assert_eq!(info.code, "shortcode_taken");
        assert_eq!(info.details["code"], "abcd");

        let info = AppError::from(RegistryError::CodeGenerationExhausted { attempts: 10 })
            .to_error_info();
        assert_eq!(info.code, "code_generation_exhausted");
    }

    #[test]
    fn test_internal_error_hides_reason() {
        let err = AppError::from(RegistryError::Internal("clock overflow".to_string()));
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("clock overflow"));
    }
}
