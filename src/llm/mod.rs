//! LLM Client Layer - the text-completion oracle behind routing and text tools
//!
//! This module provides:
//! - Request/response types for completion calls
//! - LlmClient trait for API abstraction
//! - GeminiClient implementation
//! - MockLlmClient for tests

pub mod client;
pub mod gemini;
pub mod types;

pub use client::{LlmClient, MockLlmClient};
pub use gemini::{GeminiClient, GeminiConfig};
pub use types::{CompletionRequest, CompletionResponse, GenerationSettings, Usage};
