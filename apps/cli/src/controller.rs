//! The upload/analyze/search session against the jobscout API.
//!
//! Holds the only client-side state: the text extracted from the last upload
//! and the analysis of it. The search action is gated on that analysis being
//! present; there is no other coupling between the two actions.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::ActionError;
use crate::models::{Analysis, SearchResultItem};

const DEFAULT_UPLOAD_ERROR: &str = "Failed to upload resume";
const DEFAULT_ANALYZE_ERROR: &str = "Failed to analyze resume";
const DEFAULT_SEARCH_ERROR: &str = "Failed to perform web search";

#[derive(Debug, Default, Deserialize)]
struct UploadBody {
    #[serde(default)]
    resume_text: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    analysis: Option<Analysis>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    #[serde(default)]
    results: Vec<SearchResultItem>,
    #[serde(default)]
    error: Option<String>,
}

pub struct JobSearchSession {
    http: Client,
    base_url: String,
    uploaded_resume_text: Option<String>,
    current_analysis: Option<Analysis>,
}

impl JobSearchSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            uploaded_resume_text: None,
            current_analysis: None,
        }
    }

    /// The analysis produced by the last successful upload-and-analyze, if any.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.current_analysis.as_ref()
    }

    /// Whether the search action is currently permitted.
    pub fn search_available(&self) -> bool {
        self.current_analysis.is_some()
    }

    /// Uploads the resume, then sends the extracted text for analysis.
    /// The two requests run strictly in sequence; the second is only issued
    /// once the first has succeeded. Any prior analysis is discarded up
    /// front, so a failed attempt leaves the search action gated off.
    pub async fn upload_and_analyze(
        &mut self,
        file: Option<&Path>,
    ) -> Result<&Analysis, ActionError> {
        self.current_analysis = None;
        self.uploaded_resume_text = None;

        let path = file.ok_or(ActionError::NoFileSelected)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ActionError::Upload(format!("Failed to read {}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        debug!("uploading {file_name} ({} bytes)", bytes.len());
        let form = Form::new().part("resume", Part::bytes(bytes).file_name(file_name));
        let response = self
            .http
            .post(format!("{}/api/upload_resume", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ActionError::Upload(e.to_string()))?;

        let status = response.status();
        let body: UploadBody = parse_body(response).await;
        if !status.is_success() {
            return Err(ActionError::Upload(
                body.error.unwrap_or_else(|| DEFAULT_UPLOAD_ERROR.to_string()),
            ));
        }

        debug!("upload succeeded ({} chars extracted)", body.resume_text.len());
        self.uploaded_resume_text = Some(body.resume_text);
        let resume_text = self.uploaded_resume_text.as_deref().unwrap_or_default();

        let response = self
            .http
            .post(format!("{}/api/analyze_resume", self.base_url))
            .json(&serde_json::json!({ "resume_text": resume_text }))
            .send()
            .await
            .map_err(|e| ActionError::Analysis(e.to_string()))?;

        let status = response.status();
        let body: AnalyzeBody = parse_body(response).await;
        if !status.is_success() {
            return Err(ActionError::Analysis(
                body.error
                    .unwrap_or_else(|| DEFAULT_ANALYZE_ERROR.to_string()),
            ));
        }

        debug!("analysis received");
        Ok(self.current_analysis.insert(body.analysis.unwrap_or_default()))
    }

    /// Searches the web for jobs matching the stored analysis.
    pub async fn search(&self) -> Result<Vec<SearchResultItem>, ActionError> {
        let analysis = self
            .current_analysis
            .as_ref()
            .ok_or(ActionError::AnalysisMissing)?;

        let response = self
            .http
            .post(format!("{}/api/web_search", self.base_url))
            .json(&serde_json::json!({ "analysis": analysis }))
            .send()
            .await
            .map_err(|e| ActionError::Search(e.to_string()))?;

        let status = response.status();
        let body: SearchBody = parse_body(response).await;
        if !status.is_success() {
            return Err(ActionError::Search(
                body.error.unwrap_or_else(|| DEFAULT_SEARCH_ERROR.to_string()),
            ));
        }

        debug!("search returned {} results", body.results.len());
        Ok(body.results)
    }
}

/// Reads the response body as JSON regardless of status, falling back to the
/// type's default when the body is missing or not JSON. Failure statuses
/// still carry their `error` message this way.
async fn parse_body<T: DeserializeOwned + Default>(response: reqwest::Response) -> T {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or_default()
}
