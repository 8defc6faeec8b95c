/// LLM Client: the single point of entry for all model calls in jobscout.
///
/// ARCHITECTURAL RULE: No other module may call the Ollama API directly.
/// All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GENERATE_PATH: &str = "/api/generate";
const REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// One line of the streamed generate response. Ollama sends newline-delimited
/// JSON chunks; the final chunk carries `done: true`.
#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

/// The single LLM client used by all services in jobscout.
/// Wraps the Ollama generate API with streamed-response accumulation and a
/// structured output helper.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            model,
        }
    }

    /// Makes a generate call and accumulates the streamed chunks into the
    /// full completion text.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: true,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let mut full_response = String::new();
        for line in body.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<GenerateChunk>(line) {
                Ok(chunk) => {
                    full_response.push_str(&chunk.response);
                    if chunk.done {
                        break;
                    }
                }
                Err(_) => warn!("Could not decode response chunk: {line}"),
            }
        }

        if full_response.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("LLM call succeeded: {} chars", full_response.len());
        Ok(full_response)
    }

    /// Convenience method that calls the LLM and deserializes the reply as JSON.
    /// The prompt must instruct the model to return valid JSON; fences and any
    /// surrounding prose are stripped before parsing.
    pub async fn call_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let raw = self.call(prompt).await?;

        let text = strip_json_fences(&raw);
        // Models occasionally wrap the object in conversational text despite
        // instructions; keep only the outermost {...}.
        let text = extract_json_object(text).unwrap_or("");

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Returns the slice from the first `{` through the last `}`, if any.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_object_with_surrounding_prose() {
        let input = "Sure! Here is the analysis:\n{\"summary\": \"ok\"}\nHope that helps.";
        assert_eq!(extract_json_object(input), Some("{\"summary\": \"ok\"}"));
    }

    #[test]
    fn test_extract_json_object_plain() {
        let input = "{\"a\": {\"b\": 1}}";
        assert_eq!(extract_json_object(input), Some(input));
    }

    #[test]
    fn test_extract_json_object_none() {
        assert_eq!(extract_json_object("no json here"), None);
    }

    fn ndjson(lines: &[&str]) -> String {
        let mut body = lines.join("\n");
        body.push('\n');
        body
    }

    #[tokio::test]
    async fn test_call_accumulates_streamed_chunks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ndjson(&[
                r#"{"response":"{\"summ"}"#,
                r#"{"response":"ary\":\"S\"}"}"#,
                r#"{"response":"","done":true}"#,
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new(server.uri(), "test-model".to_string());
        let text = client.call("analyze this").await.unwrap();
        assert_eq!(text, "{\"summary\":\"S\"}");
    }

    #[tokio::test]
    async fn test_call_json_parses_accumulated_reply() {
        #[derive(Deserialize)]
        struct Reply {
            summary: String,
        }

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ndjson(&[
                r#"{"response":"Here you go: {\"summary\": \"S\"}"}"#,
                r#"{"response":" Done!","done":true}"#,
            ])))
            .mount(&server)
            .await;

        let client = LlmClient::new(server.uri(), "test-model".to_string());
        let reply: Reply = client.call_json("analyze this").await.unwrap();
        assert_eq!(reply.summary, "S");
    }

    #[tokio::test]
    async fn test_call_json_reply_without_object_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(ndjson(&[r#"{"response":"I cannot do that.","done":true}"#])),
            )
            .mount(&server)
            .await;

        let client = LlmClient::new(server.uri(), "test-model".to_string());
        let result = client.call_json::<serde_json::Value>("analyze this").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_call_non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .mount(&server)
            .await;

        let client = LlmClient::new(server.uri(), "test-model".to_string());
        match client.call("analyze this").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "model not loaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_call_empty_stream_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(ndjson(&[r#"{"response":"","done":true}"#])),
            )
            .mount(&server)
            .await;

        let client = LlmClient::new(server.uri(), "test-model".to_string());
        assert!(matches!(
            client.call("analyze this").await,
            Err(LlmError::EmptyContent)
        ));
    }
}
