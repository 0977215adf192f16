//! Shared plumbing for the LLM-backed text tools

use serde::Deserialize;

use crate::error::Result;
use crate::llm::{CompletionRequest, GenerationSettings, LlmClient};

/// Parameters for text_summarizer and text_funifier
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextParams {
    pub text: String,
}

/// Remove one pair of surrounding double quotes, if present
pub fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Send `prompt` to the model and clean up the reply
pub(crate) async fn generate(
    llm: &dyn LlmClient,
    prompt: String,
    settings: GenerationSettings,
) -> Result<String> {
    let response = llm
        .complete(CompletionRequest::with_settings(prompt, settings))
        .await?;
    Ok(strip_wrapping_quotes(response.text.trim()).to_string())
}
