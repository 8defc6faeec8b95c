use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::RESUME_ANALYZE_PROMPT;
use crate::models::{Analysis, AnalyzeRequest, AnalyzeResponse, UploadResponse};
use crate::resume::extract::extract_resume_text;
use crate::state::AppState;

/// POST /api/upload_resume
///
/// Accepts a multipart form with a single `resume` file field and returns the
/// extracted plain text. The text is not stored server-side: the client holds
/// it and sends it back for analysis.
pub async fn handle_upload_resume(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut resume_file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload request: {e}")))?
    {
        if field.name() == Some("resume") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid upload request: {e}")))?;
            resume_file = Some((file_name, data));
        }
    }

    let (file_name, data) =
        resume_file.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    if file_name.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let resume_text = extract_resume_text(&file_name, &data)?;
    info!("Resume parsed successfully ({} chars)", resume_text.len());

    Ok(Json(UploadResponse {
        message: "Resume uploaded and parsed successfully".to_string(),
        resume_text,
    }))
}

/// POST /api/analyze_resume
///
/// Runs the extracted resume text through the LLM and returns the structured
/// analysis object.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "No resume text provided for analysis".to_string(),
        ));
    }

    let prompt = RESUME_ANALYZE_PROMPT.replace("{resume_text}", &req.resume_text);

    info!("Calling the LLM for resume analysis...");
    let analysis: Analysis = state.llm.call_json(&prompt).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}
