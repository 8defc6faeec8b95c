//! Client-side view of the API wire types.

use serde::{Deserialize, Serialize};

/// Structured AI-derived summary of a resume, as returned by the analyze
/// endpoint. Every field is optional; rendering falls back to `N/A`.
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

/// One web-search hit. `query_type` is the server-assigned category label
/// used to group results when rendering; items without one are grouped
/// under "unspecified".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
