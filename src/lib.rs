//! toolroute - route free-text requests to tools chosen by an LLM
//!
//! A prompt is sent to the model together with the tool catalog; the model
//! replies with a JSON tool call, which is parsed, dispatched to the matching
//! tool, and rendered as text.

pub mod config;
pub mod error;
pub mod llm;
pub mod router;
pub mod session;
pub mod tools;

pub use error::{Result, RouterError};
