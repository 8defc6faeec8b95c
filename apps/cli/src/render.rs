//! Pure rendering of session state into terminal text.
//!
//! Nothing here touches the network or the session: every function maps an
//! immutable value to a string, so the output for a given state is always
//! the same.

use console::style;

use crate::models::{Analysis, SearchResultItem};

/// Rendered in the analysis pane when upload or analysis fails.
pub const ANALYSIS_FAILED: &str = "Analysis failed.";
/// Rendered in the results pane when a search comes back empty.
pub const NO_RESULTS: &str = "No relevant results found.";

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Pending,
    Success,
    Error,
}

/// One line of status text with a tone that decides its color.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Pending,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

pub fn render_status(line: &StatusLine) -> String {
    let styled = match line.tone {
        Tone::Pending => style(&line.text).yellow(),
        Tone::Success => style(&line.text).green(),
        Tone::Error => style(&line.text).red(),
    };
    styled.to_string()
}

/// Renders the analysis pane: a fixed field order, `N/A` for anything the
/// model left out, list fields comma-joined.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", style("Resume Analysis").bold()));
    out.push_str(&format!(
        "Summary: {}\n",
        text_or_missing(analysis.summary.as_deref())
    ));
    out.push_str(&format!(
        "Skills: {}\n",
        list_or_missing(analysis.skills.as_deref())
    ));
    out.push_str(&format!(
        "Industries: {}\n",
        list_or_missing(analysis.industries.as_deref())
    ));
    out.push_str(&format!(
        "Suggested Companies: {}\n",
        list_or_missing(analysis.suggested_companies.as_deref())
    ));
    out.push_str(&format!(
        "Suggested Roles/Keywords: {}\n",
        list_or_missing(analysis.suggested_roles.as_deref())
    ));
    out
}

/// Renders the results pane: items grouped under their query-type heading,
/// groups in first-seen order, items in insertion order within each group.
pub fn render_results(results: &[SearchResultItem]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", style("Web Search Results").bold()));

    if results.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    for (group, items) in group_by_query_type(results) {
        out.push_str(&format!("\n{}\n", style(group_heading(group)).bold()));
        for item in items {
            out.push_str(&format!("  {}\n", style(&item.title).cyan()));
            out.push_str(&format!("  {}\n", item.description));
            out.push_str(&format!("  {}\n", style(&item.url).dim()));
        }
    }
    out
}

/// Groups results by `query_type` (missing -> "unspecified"), preserving the
/// order in which each group was first seen.
pub fn group_by_query_type(
    results: &[SearchResultItem],
) -> Vec<(&str, Vec<&SearchResultItem>)> {
    let mut groups: Vec<(&str, Vec<&SearchResultItem>)> = Vec::new();
    for item in results {
        let key = item.query_type.as_deref().unwrap_or("unspecified");
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, items)) => items.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// "remote_jobs" -> "Remote Jobs"
pub fn group_heading(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => MISSING.to_string(),
    }
}

fn list_or_missing(values: Option<&[String]>) -> String {
    match values {
        Some(v) if !v.is_empty() => v.join(", "),
        _ => MISSING.to_string(),
    }
}
