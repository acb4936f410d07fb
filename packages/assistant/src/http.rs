//! Generator backed by a Gemini-style `generateContent` HTTP endpoint.

use crate::error::{GenerateError, GenerateResult};
use crate::request::GenerationRequest;
use crate::ContentGenerator;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl GeneratorConfig {
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// HTTP generator. One request per call, never retried.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: Client,
    config: GeneratorConfig,
    api_key: String,
}

impl HttpGenerator {
    pub fn new(config: GeneratorConfig, api_key: impl Into<String>) -> GenerateResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Read the API key from the configured environment variable
    pub fn from_env(config: GeneratorConfig) -> GenerateResult<Self> {
        let api_key = env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenerateError::Auth(format!("environment variable {} is not set", config.api_key_env))
            })?;
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl ContentGenerator for HttpGenerator {
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn generate(&self, request: &GenerationRequest) -> GenerateResult<String> {
        if request.is_blank() {
            return Err(GenerateError::EmptyPrompt);
        }

        info!("Requesting generated block");
        let response = self
            .client
            .post(self.config.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerateError::Transport("request timed out".to_string())
                } else if e.is_connect() {
                    GenerateError::Transport("unable to reach the generator".to_string())
                } else {
                    GenerateError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerateError::Auth(body),
                _ => GenerateError::Status {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;
        let text = extract_text(&value)?;
        debug!(bytes = text.len(), "Generator responded");
        Ok(text)
    }
}

/// Body of a `generateContent` call
pub fn request_body(request: &GenerationRequest) -> Value {
    json!({
        "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
        "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    })
}

/// Text of the first candidate, its parts concatenated
pub fn extract_text(response: &Value) -> GenerateResult<String> {
    let parts = response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .ok_or_else(|| GenerateError::MalformedResponse("response has no candidates".to_string()))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(GenerateError::MalformedResponse("response text is empty".to_string()));
    }
    Ok(text)
}
