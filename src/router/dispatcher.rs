//! Tool dispatch
//!
//! Maps a resolved [`ToolCall`] onto the matching tool, builds its typed
//! parameters, runs it, and renders the outcome as user-facing text.

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RouterError};
use crate::llm::{GenerationSettings, LlmClient};
use crate::tools::{
    Funifier, MultiplicationParams, MultiplicationTool, Summarizer, TextParams, ToolKind,
    ToolRegistry, VowelCountParams, VowelCounter, defaults,
};

use super::resolver::ToolCall;

/// Runs tool calls against the built-in tools
pub struct ToolDispatcher {
    registry: ToolRegistry,
    multiplier: MultiplicationTool,
    vowel_counter: VowelCounter,
    summarizer: Summarizer,
    funifier: Funifier,
}

impl ToolDispatcher {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_settings(llm, defaults::SUMMARIZER, defaults::FUNIFIER)
    }

    pub fn with_settings(
        llm: Arc<dyn LlmClient>,
        summarizer: GenerationSettings,
        funifier: GenerationSettings,
    ) -> Self {
        Self {
            registry: ToolRegistry::standard(),
            multiplier: MultiplicationTool,
            vowel_counter: VowelCounter,
            summarizer: Summarizer::with_settings(llm.clone(), summarizer),
            funifier: Funifier::with_settings(llm, funifier),
        }
    }

    /// Execute `call` and describe the result; never fails
    pub async fn dispatch(&self, call: &ToolCall) -> String {
        let Some(kind) = ToolKind::from_name(&call.name) else {
            warn!("Model selected unknown tool: {}", call.name);
            return format!("Unknown tool: {}", call.name);
        };

        match self.invoke(kind, &call.parameters).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Tool {} failed: {}", kind, e);
                format!("Error executing tool: {}", e)
            }
        }
    }

    /// Validate, build parameters, run, and format one tool
    pub async fn invoke(&self, kind: ToolKind, parameters: &Value) -> Result<String> {
        self.registry.validate_parameters(kind.name(), parameters)?;
        if kind.uses_network() {
            info!("Invoking {} (calls the model)", kind);
        } else {
            info!("Invoking {}", kind);
        }

        match kind {
            ToolKind::Multiplication => {
                let params: MultiplicationParams = build_params(kind, parameters)?;
                let product = self.multiplier.multiply(&params);
                Ok(format!("The product is {}", product))
            }
            ToolKind::VowelCounter => {
                let params: VowelCountParams = build_params(kind, parameters)?;
                let count = self.vowel_counter.count_vowels(&params);
                Ok(format!("The number of vowels is {}", count))
            }
            ToolKind::TextSummarizer => {
                let params: TextParams = build_params(kind, parameters)?;
                let summary = self.summarizer.summarize(&params.text).await?;
                Ok(format!("Summary: {}", summary))
            }
            ToolKind::TextFunifier => {
                let params: TextParams = build_params(kind, parameters)?;
                let funified = self.funifier.funify(&params.text).await?;
                Ok(format!("Funified text: {}", funified))
            }
        }
    }
}

/// Deserialize a tool's parameter bundle from the untyped call arguments
fn build_params<T: DeserializeOwned>(kind: ToolKind, parameters: &Value) -> Result<T> {
    <T as Deserialize>::deserialize(parameters).map_err(|e| RouterError::InvalidParameters {
        tool: kind.name().to_string(),
        message: e.to_string(),
    })
}
