//! Wire types for the three public endpoints.

use serde::{Deserialize, Serialize};

/// Structured AI-derived summary of a resume. All fields are optional:
/// the model is instructed to return every one, but callers must tolerate
/// a partial object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_companies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_roles: Option<Vec<String>>,
}

/// One web-search hit, tagged with the category of query that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub description: String,
    pub query_type: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub message: String,
    pub queries_performed: Vec<String>,
    pub results: Vec<SearchResultItem>,
}
