//! Tool System - descriptors, registry, and the tool implementations

mod catalog;
mod definition;
mod funifier;
mod kind;
mod multiply;
mod summarizer;
mod text;
mod vowel_counter;

pub use catalog::ToolRegistry;
pub use definition::{FunctionDefinition, ItemSchema, ParamSchema, ToolSpec};
pub use funifier::Funifier;
pub use kind::ToolKind;
pub use multiply::{MultiplicationParams, MultiplicationTool, Product};
pub use summarizer::Summarizer;
pub use text::{TextParams, strip_wrapping_quotes};
pub use vowel_counter::{VowelCountParams, VowelCounter};

pub mod defaults {
    //! Generation settings used when no config overrides them
    pub use super::funifier::DEFAULT_SETTINGS as FUNIFIER;
    pub use super::summarizer::DEFAULT_SETTINGS as SUMMARIZER;
}
