use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::search::provider::SearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable web-search backend. Production: `BraveSearch`.
    pub search: Arc<dyn SearchProvider>,
}
