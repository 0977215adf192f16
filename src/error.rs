//! Error types for toolroute
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while routing a request
#[derive(Debug, Error)]
pub enum RouterError {
    /// Credential variable absent from the environment and `.env`
    #[error("Missing API key: environment variable {env_var} not set")]
    MissingApiKey { env_var: String },

    /// LLM API error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Tool execution error
    #[error("{0}")]
    Tool(String),

    /// Tool parameters could not be built from the call
    #[error("Invalid parameters for {tool}: {message}")]
    InvalidParameters { tool: String, message: String },

    /// Tool name not present in the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for toolroute operations
pub type Result<T> = std::result::Result<T, RouterError>;
