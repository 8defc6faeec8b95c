use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// A single hit returned by a web-search backend, before it is tagged with
/// the query category that produced it.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Web-search backend seam. The search handler only depends on this trait;
/// production wires in `BraveSearch`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}
