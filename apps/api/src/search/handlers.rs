use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{SearchRequest, SearchResponse, SearchResultItem};
use crate::search::queries::build_queries;
use crate::state::AppState;

/// POST /api/web_search
///
/// Runs one web search per query derived from the analysis. Individual query
/// failures are logged and skipped so one bad search does not sink the batch.
pub async fn handle_web_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let analysis = req.analysis.ok_or_else(|| {
        AppError::Validation("No analysis data provided for web search".to_string())
    })?;

    let queries = build_queries(&analysis);
    info!("Running {} web searches", queries.len());

    let mut queries_performed = Vec::with_capacity(queries.len());
    let mut results = Vec::new();

    for q in queries {
        queries_performed.push(q.query.clone());
        match state.search.search(&q.query).await {
            Ok(hits) => results.extend(hits.into_iter().map(|hit| SearchResultItem {
                title: hit.title,
                url: hit.url,
                description: hit.description,
                query_type: q.query_type.to_string(),
            })),
            Err(e) => warn!("Web search for {:?} failed: {e}", q.query),
        }
    }

    Ok(Json(SearchResponse {
        message: "Web search completed".to_string(),
        queries_performed,
        results,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::search::provider::{SearchError, SearchHit, SearchProvider};
    use crate::state::AppState;

    /// Returns one canned hit per query, or an error for queries listed in
    /// `failing`.
    struct StubSearch {
        failing: Vec<String>,
    }

    #[async_trait]
    impl SearchProvider for StubSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
            if self.failing.iter().any(|f| f == query) {
                return Err(SearchError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(vec![SearchHit {
                title: format!("Result for {query}"),
                url: "https://jobs.example/1".to_string(),
                description: "A matching opening.".to_string(),
            }])
        }
    }

    fn test_app(failing: Vec<String>) -> axum::Router {
        build_router(AppState {
            llm: LlmClient::new("http://127.0.0.1:0".to_string(), "test-model".to_string()),
            search: Arc::new(StubSearch { failing }),
        })
    }

    fn search_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/web_search")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_without_analysis_is_rejected() {
        let response = test_app(vec![])
            .oneshot(search_request(json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "No analysis data provided for web search");
    }

    #[tokio::test]
    async fn test_search_tags_results_with_query_type() {
        let request = search_request(json!({
            "analysis": {
                "suggested_roles": ["Backend Developer"],
                "suggested_companies": ["Acme"]
            }
        }));

        let response = test_app(vec![]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Web search completed");
        assert_eq!(
            body["queries_performed"],
            json!([
                "\"Backend Developer\" job openings",
                "\"Backend Developer\" job at \"Acme\""
            ])
        );
        assert_eq!(body["results"][0]["query_type"], "general_role");
        assert_eq!(body["results"][1]["query_type"], "targeted_company_role");
    }

    #[tokio::test]
    async fn test_failed_queries_are_skipped_but_still_reported() {
        let request = search_request(json!({
            "analysis": {
                "suggested_roles": ["Backend Developer", "Platform Engineer"]
            }
        }));

        let failing = vec!["\"Backend Developer\" job openings".to_string()];
        let response = test_app(failing).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        // Both queries ran, only the surviving one contributed results.
        assert_eq!(body["queries_performed"].as_array().unwrap().len(), 2);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0]["title"],
            "Result for \"Platform Engineer\" job openings"
        );
    }

    #[tokio::test]
    async fn test_empty_analysis_yields_empty_results() {
        let response = test_app(vec![])
            .oneshot(search_request(json!({ "analysis": {} })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["results"], json!([]));
        assert_eq!(body["queries_performed"], json!([]));
    }
}
