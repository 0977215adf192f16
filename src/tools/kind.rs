//! The closed set of routable tools

use std::fmt;

use super::definition::{ParamSchema, ToolSpec};

/// Identifier for each tool the router can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Multiplication,
    VowelCounter,
    TextSummarizer,
    TextFunifier,
}

impl ToolKind {
    /// All tools in presentation order
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Multiplication,
        ToolKind::VowelCounter,
        ToolKind::TextSummarizer,
        ToolKind::TextFunifier,
    ];

    /// Name the model uses to select this tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Multiplication => "multiplication_tool",
            Self::VowelCounter => "vowel_counter",
            Self::TextSummarizer => "text_summarizer",
            Self::TextFunifier => "text_funifier",
        }
    }

    /// Parse from the model-facing name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether the tool calls out to the LLM
    pub fn uses_network(&self) -> bool {
        matches!(self, Self::TextSummarizer | Self::TextFunifier)
    }

    /// Descriptor shown to the model
    pub fn spec(&self) -> ToolSpec {
        match self {
            Self::Multiplication => {
                ToolSpec::new(self.name(), "Multiplies a list of numbers together").with_param(
                    "numbers",
                    ParamSchema::array_of("number", "The numbers to multiply"),
                )
            }
            Self::VowelCounter => {
                ToolSpec::new(self.name(), "Counts the number of vowels in a given text")
                    .with_param(
                        "text",
                        ParamSchema::scalar("string", "The text to count vowels in"),
                    )
            }
            Self::TextSummarizer => ToolSpec::new(self.name(), "Summarizes the given text")
                .with_param("text", ParamSchema::scalar("string", "The text to summarize")),
            Self::TextFunifier => ToolSpec::new(self.name(), "Makes the given text funnier")
                .with_param("text", ParamSchema::scalar("string", "The text to make funnier")),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
