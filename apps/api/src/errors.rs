use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The wire body is always a flat `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Could not extract text from PDF. The file may be scanned or image-based.")]
    Extraction,

    #[error("Invalid OpenAI API key. Please check your .env file.")]
    UpstreamAuth,

    #[error("OpenAI API quota exceeded. Please check your billing.")]
    UpstreamQuota,

    #[error("Failed to parse AI response")]
    Parse,

    #[error("AI response missing required fields")]
    Schema,

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Multipart(#[from] MultipartError),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::InvalidApiKey => AppError::UpstreamAuth,
            LlmError::QuotaExceeded => AppError::UpstreamQuota,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::Extraction | AppError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UpstreamAuth
            | AppError::UpstreamQuota
            | AppError::Parse
            | AppError::Schema
            | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {message}");
        } else {
            tracing::warn!("Request rejected: {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_auth_error_maps_to_upstream_auth() {
        let err: AppError = LlmError::InvalidApiKey.into();
        assert!(matches!(err, AppError::UpstreamAuth));
        assert_eq!(
            err.to_string(),
            "Invalid OpenAI API key. Please check your .env file."
        );
    }

    #[test]
    fn test_llm_quota_error_maps_to_upstream_quota() {
        let err: AppError = LlmError::QuotaExceeded.into();
        assert!(matches!(err, AppError::UpstreamQuota));
    }

    #[test]
    fn test_other_llm_errors_pass_message_through() {
        let err: AppError = LlmError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        }
        .into();
        match err {
            AppError::Upstream(msg) => assert!(msg.contains("service unavailable")),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
