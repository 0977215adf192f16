//! Gemini API client implementation
//!
//! This module implements the LlmClient trait for the Google Gemini
//! `generateContent` endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{Value, json};

use crate::error::{Result, RouterError};
use crate::llm::client::LlmClient;
use crate::llm::types::{CompletionRequest, CompletionResponse, Usage};

/// Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default credential variable
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    /// None leaves reqwest's default (no timeout) in place
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
            timeout: None,
        }
    }
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
    usage: Arc<Mutex<Usage>>,
}

impl GeminiClient {
    /// Create a client reading the key from `env_var`
    pub fn from_env(env_var: &str, config: GeminiConfig) -> Result<Self> {
        Self::from_key_lookup(env_var, std::env::var(env_var).ok(), config)
    }

    /// Unset and empty keys are both reported as missing
    fn from_key_lookup(
        env_var: &str,
        api_key: Option<String>,
        config: GeminiConfig,
    ) -> Result<Self> {
        let missing = || RouterError::MissingApiKey {
            env_var: env_var.to_string(),
        };

        let client = Self::with_api_key(api_key.ok_or_else(missing)?, config)?;
        if !client.is_ready() {
            return Err(missing());
        }
        Ok(client)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RouterError::Llm(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
            usage: Arc::new(Mutex::new(Usage::default())),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body for the Gemini API
    fn build_request(&self, request: &CompletionRequest) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": request.max_output_tokens
            }
        })
    }

    /// Parse the API response into a CompletionResponse
    fn parse_response(&self, body: Value) -> Result<CompletionResponse> {
        let usage = body
            .get("usageMetadata")
            .map(|u| {
                Usage::new(
                    u["promptTokenCount"].as_u64().unwrap_or(0),
                    u["candidatesTokenCount"].as_u64().unwrap_or(0),
                )
            })
            .unwrap_or_default();

        if let Ok(mut total) = self.usage.lock() {
            total.add(&usage);
        }

        let parts = body["candidates"][0]["content"]["parts"].as_array();
        let text: Option<String> = parts.map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        });

        match text {
            Some(text) => Ok(CompletionResponse { text, usage }),
            None => {
                let reason = body["candidates"][0]["finishReason"]
                    .as_str()
                    .or_else(|| body["promptFeedback"]["blockReason"].as_str())
                    .unwrap_or("unknown");
                Err(RouterError::Llm(format!(
                    "Response contained no text (reason: {})",
                    reason
                )))
            }
        }
    }

    /// Send a request to the Gemini API
    async fn send_request(&self, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RouterError::Llm(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(RouterError::Llm(format!(
                "Rate limited, retry after {} seconds",
                retry_after
            )));
        }

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RouterError::Llm(format!("API error {}: {}", status, error_body)));
        }

        response
            .json()
            .await
            .map_err(|e| RouterError::Llm(format!("Failed to parse response: {}", e)))
    }

    /// Get cumulative token usage
    pub fn total_usage(&self) -> Usage {
        self.usage.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!(
            "generateContent model={} temperature={} max_output_tokens={}",
            self.config.model, request.temperature, request.max_output_tokens
        );
        let body = self.build_request(&request);
        let response = self.send_request(body).await?;
        self.parse_response(response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
