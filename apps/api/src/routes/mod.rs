pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers::{handle_analyze_resume, handle_upload_resume};
use crate::search::handlers::handle_web_search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload_resume", post(handle_upload_resume))
        .route("/api/analyze_resume", post(handle_analyze_resume))
        .route("/api/web_search", post(handle_web_search))
        .with_state(state)
}
