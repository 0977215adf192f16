//! Routing agent - resolve a prompt, then dispatch the chosen tool

use std::sync::Arc;

use log::info;

use crate::error::Result;
use crate::llm::{GenerationSettings, LlmClient};
use crate::tools::{ToolRegistry, defaults};

use super::dispatcher::ToolDispatcher;
use super::resolver::{self, IntentResolver, ResolutionError, ToolCall};

/// Generation settings for each model call the agent makes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSettings {
    pub resolver: GenerationSettings,
    pub summarizer: GenerationSettings,
    pub funifier: GenerationSettings,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            resolver: resolver::DEFAULT_SETTINGS,
            summarizer: defaults::SUMMARIZER,
            funifier: defaults::FUNIFIER,
        }
    }
}

/// Result of routing one prompt
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    /// The call the model chose, if its reply could be understood
    pub call: Option<ToolCall>,
    /// User-facing text: the tool output or a description of what went wrong
    pub message: String,
}

impl RouteOutcome {
    fn unresolved(error: ResolutionError) -> Self {
        let message = match &error {
            ResolutionError::InvalidFormat { .. } => error.to_string(),
            ResolutionError::NoJson { .. }
            | ResolutionError::Unparseable { .. }
            | ResolutionError::Declined { .. } => {
                format!("Error: {}", error)
            }
        };
        Self {
            call: None,
            message,
        }
    }
}

/// Routes free-text prompts to tools
pub struct RoutingAgent {
    resolver: IntentResolver,
    dispatcher: ToolDispatcher,
}

impl RoutingAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_settings(llm, AgentSettings::default())
    }

    pub fn with_settings(llm: Arc<dyn LlmClient>, settings: AgentSettings) -> Self {
        Self {
            resolver: IntentResolver::with_settings(
                llm.clone(),
                ToolRegistry::standard(),
                settings.resolver,
            ),
            dispatcher: ToolDispatcher::with_settings(llm, settings.summarizer, settings.funifier),
        }
    }

    /// Route `prompt` to a tool and return what happened
    ///
    /// Only a failed model call during resolution is an error; everything
    /// else is reported in the outcome's message.
    pub async fn route(&self, prompt: &str) -> Result<RouteOutcome> {
        info!("Routing prompt: {}", prompt);

        let call = match self.resolver.resolve(prompt).await? {
            Ok(call) => call,
            Err(e) => return Ok(RouteOutcome::unresolved(e)),
        };

        info!("Tool to be called: {} with {}", call.name, call.parameters);
        let message = self.dispatcher.dispatch(&call).await;

        Ok(RouteOutcome {
            call: Some(call),
            message,
        })
    }
}
