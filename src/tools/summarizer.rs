//! text_summarizer - concise summary produced by the LLM

use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::llm::{GenerationSettings, LlmClient};

use super::text::generate;

/// Low randomness; summaries should stay close to the source
pub const DEFAULT_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.1,
    max_output_tokens: 150,
};

/// Summarizes text using the LLM
pub struct Summarizer {
    llm: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_settings(llm, DEFAULT_SETTINGS)
    }

    pub fn with_settings(llm: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { llm, settings }
    }

    pub fn build_prompt(text: &str) -> String {
        format!(
            "Provide a concise summary of the following text.\n\
             Capture the key points while significantly reducing the length.\n\n\
             Text to summarize: {}\n\n\
             Respond with ONLY the summary, no explanations or additional commentary.",
            text
        )
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        generate(self.llm.as_ref(), Self::build_prompt(text), self.settings)
            .await
            .map_err(|e| RouterError::Tool(format!("Error in summarizing text: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[test]
    fn test_build_prompt() {
        let prompt = Summarizer::build_prompt("The quick brown fox.");
        assert!(prompt.starts_with("Provide a concise summary of the following text."));
        assert!(prompt.contains("Text to summarize: The quick brown fox."));
        assert!(prompt.ends_with("no explanations or additional commentary."));
    }

    #[tokio::test]
    async fn test_summarize_uses_low_temperature() {
        let mock = Arc::new(MockLlmClient::with_responses(["\"Fox jumps.\""]));
        let summarizer = Summarizer::new(mock.clone());

        let summary = summarizer.summarize("The quick brown fox jumps.").await.unwrap();

        assert_eq!(summary, "Fox jumps.");
        let request = &mock.requests()[0];
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.max_output_tokens, 150);
        assert!(request.prompt.contains("The quick brown fox jumps."));
    }

    #[tokio::test]
    async fn test_summarize_wraps_llm_failure() {
        let mock = Arc::new(MockLlmClient::new());
        mock.push_error("quota exceeded");
        let summarizer = Summarizer::new(mock);

        let err = summarizer.summarize("anything").await.unwrap_err();
        assert!(matches!(err, RouterError::Tool(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("Error in summarizing text: "));
        assert!(msg.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_custom_settings() {
        let mock = Arc::new(MockLlmClient::with_responses(["ok"]));
        let summarizer = Summarizer::with_settings(mock.clone(), GenerationSettings::new(0.3, 64));
        summarizer.summarize("x").await.unwrap();
        assert_eq!(mock.requests()[0].max_output_tokens, 64);
    }
}
