use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::resume::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every failure serializes as a flat `{"error": "<message>"}` body, which is
/// the shape clients read their error text from.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to process resume file: {0}")]
    ResumeExtract(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Failed to parse AI analysis response")]
    AnalysisParse,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ResumeExtract(msg) => {
                tracing::error!("Error processing resume: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to process resume file: {msg}"),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to perform resume analysis".to_string(),
                )
            }
            AppError::AnalysisParse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse AI analysis response".to_string(),
            ),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(name) => {
                AppError::Validation(format!("Unsupported file format: {name}"))
            }
            other => AppError::ResumeExtract(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent => AppError::AnalysisParse,
            other => AppError::Llm(other.to_string()),
        }
    }
}
