use thiserror::Error;

/// Failures of the two user-triggered actions. Every variant is terminal to
/// its action only and is surfaced as styled text, never propagated further.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Upload requested without a resume file.
    #[error("Please select a resume file.")]
    NoFileSelected,

    /// Search requested before any successful analysis.
    #[error("Please upload and analyze a resume first.")]
    AnalysisMissing,

    /// Upload step failed; carries the server-supplied or default message.
    #[error("{0}")]
    Upload(String),

    /// Analysis step failed.
    #[error("{0}")]
    Analysis(String),

    /// Web-search step failed.
    #[error("{0}")]
    Search(String),
}
