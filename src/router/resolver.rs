//! Intent resolution
//!
//! Asks the model which tool to use for a prompt and turns its free-form reply
//! into a [`ToolCall`]. The reply is parsed strictly first; if that fails, the
//! first `{` through the last `}` is salvaged and parsed instead. The salvage is
//! greedy, so replies with several objects or stray braces around the object
//! still fail to parse.

use std::sync::{Arc, LazyLock};

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::Result;
use crate::llm::{CompletionRequest, GenerationSettings, LlmClient};
use crate::tools::ToolRegistry;

/// First `{` through last `}`, across newlines
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"));

/// Routing decisions need a compact JSON object, nothing more
pub const DEFAULT_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.1,
    max_output_tokens: 100,
};

/// The tool the model chose and the arguments it extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub parameters: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

/// Why a model reply could not be turned into a ToolCall
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    #[error("No JSON found in response: {raw}")]
    NoJson { raw: String },

    #[error("Failed to parse JSON from response: {raw}")]
    Unparseable { raw: String },

    #[error("Invalid tool call format: {value}")]
    InvalidFormat { value: Value },

    /// The model answered with an `error` key instead of a call
    #[error("{message}")]
    Declined { message: String },
}

/// Outcome of resolving one prompt
pub type Resolution = std::result::Result<ToolCall, ResolutionError>;

/// Parse a model reply into a ToolCall (strict, then salvage)
pub fn parse_tool_call(raw: &str) -> Resolution {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(strict_err) => {
            debug!("Strict JSON parse failed: {}", strict_err);
            let candidate = JSON_OBJECT.find(raw).ok_or_else(|| ResolutionError::NoJson {
                raw: raw.to_string(),
            })?;
            serde_json::from_str(candidate.as_str()).map_err(|_| ResolutionError::Unparseable {
                raw: raw.to_string(),
            })?
        }
    };

    tool_call_from_value(value)
}

/// Require an object with a string `name` and a `parameters` key
///
/// An `error` key takes precedence over everything else.
fn tool_call_from_value(value: Value) -> Resolution {
    if let Some(error) = value.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ResolutionError::Declined { message });
    }

    let call = value.as_object().and_then(|obj| {
        let name = obj.get("name")?.as_str()?;
        let parameters = obj.get("parameters")?;
        Some(ToolCall::new(name, parameters.clone()))
    });

    call.ok_or(ResolutionError::InvalidFormat { value })
}

/// Resolves prompts to tool calls using the model
pub struct IntentResolver {
    llm: Arc<dyn LlmClient>,
    registry: ToolRegistry,
    settings: GenerationSettings,
}

impl IntentResolver {
    pub fn new(llm: Arc<dyn LlmClient>, registry: ToolRegistry) -> Self {
        Self::with_settings(llm, registry, DEFAULT_SETTINGS)
    }

    pub fn with_settings(
        llm: Arc<dyn LlmClient>,
        registry: ToolRegistry,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            llm,
            registry,
            settings,
        }
    }

    /// Build the routing instruction for `prompt`
    pub fn build_prompt(&self, prompt: &str) -> Result<String> {
        let definitions = serde_json::to_string_pretty(&self.registry.function_definitions())?;

        Ok(format!(
            "Based on this request: '{prompt}', determine which tool to use and what parameters to extract.\n\
             Respond with a JSON object containing 'name' (tool name) and 'parameters' (tool parameters).\n\n\
             Available tools: {definitions}\n\n\
             Example response format:\n\
             {{\n    \"name\": \"multiplication_tool\",\n    \"parameters\": {{\n        \"numbers\": [5, 6]\n    }}\n}}"
        ))
    }

    /// Ask the model for a tool call
    ///
    /// The outer error is a failed model call; the inner one is a reply that
    /// could not be understood.
    pub async fn resolve(&self, prompt: &str) -> Result<Resolution> {
        let request = CompletionRequest::with_settings(self.build_prompt(prompt)?, self.settings);
        let response = self.llm.complete(request).await?;
        debug!("Routing reply: {}", response.text);

        let resolution = parse_tool_call(&response.text);
        if let Err(e) = &resolution {
            warn!("Could not resolve tool call: {}", e);
        }
        Ok(resolution)
    }
}
