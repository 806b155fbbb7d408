//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use sp_config::OpenAiConfig;

use crate::error::ExtractError;
use crate::service::StructuredExtractor;

/// Name of the response format sent with each request.
const FORMAT_NAME: &str = "form_data";

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Error body of an OpenAI-compatible API.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Structured extraction through `POST {base_url}/chat/completions`.
pub struct OpenAiExtractor {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiExtractor {
    /// Create a client from provider settings.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Config` if no API key is configured, or
    /// `ExtractError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, ExtractError> {
        let config = config.require()?;
        let http = reqwest::Client::builder()
            .user_agent("smartpaste/0.1")
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str, schema: &Value) -> Value {
        json!({
            "model": self.model,
            "temperature": 0,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": FORMAT_NAME,
                    "schema": schema,
                    // Strict mode requires every property; ours are all optional.
                    "strict": false
                }
            }
        })
    }
}

#[async_trait]
impl StructuredExtractor for OpenAiExtractor {
    async fn generate_object(&self, prompt: &str, schema: &Value) -> Result<Value, ExtractError> {
        let body = self.request_body(prompt, schema);
        tracing::debug!(model = %self.model, url = %self.url, "sending completion request");

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "completion request rejected");
            return Err(api_error(status.as_u16(), &body));
        }

        let data: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| ExtractError::Parse(format!("completion body: {e}")))?;
        parse_completion(data)
    }
}

/// Prefer `error.message` from the body; fall back to the raw text.
fn api_error(status: u16, body: &str) -> ExtractError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.trim().to_string(), |envelope| envelope.error.message);
    ExtractError::Api { status, message }
}

/// Pull the JSON object out of the first choice.
fn parse_completion(data: CompletionResponse) -> Result<Value, ExtractError> {
    let message = data
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ExtractError::Parse("completion has no choices".into()))?;

    if let Some(refusal) = message.refusal {
        return Err(ExtractError::Refused(refusal));
    }

    let content = message
        .content
        .ok_or_else(|| ExtractError::Parse("completion has no content".into()))?;
    let object: Value = serde_json::from_str(strip_code_fence(&content))
        .map_err(|e| ExtractError::Parse(format!("content is not JSON: {e}")))?;

    if object.is_object() {
        Ok(object)
    } else {
        Err(ExtractError::Parse("content is not a JSON object".into()))
    }
}

/// Some compatible servers wrap JSON in a Markdown fence despite the format.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}
