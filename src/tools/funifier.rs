//! text_funifier - funnier rewrite produced by the LLM

use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::llm::{GenerationSettings, LlmClient};

use super::text::generate;

pub const DEFAULT_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.7,
    max_output_tokens: 150,
};

/// Makes text funnier using the LLM
pub struct Funifier {
    llm: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl Funifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_settings(llm, DEFAULT_SETTINGS)
    }

    pub fn with_settings(llm: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { llm, settings }
    }

    pub fn build_prompt(text: &str) -> String {
        format!(
            "Make the following text funnier while keeping its core meaning.\n\
             Be creative but don't make it too silly. Keep it concise.\n\n\
             Text to funify: {}\n\n\
             Respond with ONLY the funified text, no explanations or additional commentary.",
            text
        )
    }

    pub async fn funify(&self, text: &str) -> Result<String> {
        generate(self.llm.as_ref(), Self::build_prompt(text), self.settings)
            .await
            .map_err(|e| RouterError::Tool(format!("Error in funifying text: {}", e)))
    }
}
