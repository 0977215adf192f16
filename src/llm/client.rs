//! LlmClient trait and a scripted mock for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, RouterError};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Stateless text-completion oracle - each call is independent
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Model identifier used for requests
    fn model(&self) -> &str;

    /// Whether the client has what it needs to make calls
    fn is_ready(&self) -> bool;
}

/// Scripted client that replays canned responses in order
///
/// Every request is recorded so tests can assert on prompts and settings.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    responses: Mutex<VecDeque<std::result::Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    /// Create a mock with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers with the given texts, in order
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mock = Self::new();
        for text in responses {
            mock.push_response(text);
        }
        mock
    }

    /// Queue a successful response
    pub fn push_response(&self, text: impl Into<String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Ok(text.into()));
        }
    }

    /// Queue a failing call
    pub fn push_error(&self, message: impl Into<String>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Err(message.into()));
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of calls made
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let next = self
            .responses
            .lock()
            .map_err(|_| RouterError::Llm("mock response queue poisoned".to_string()))?
            .pop_front();

        match next {
            Some(Ok(text)) => Ok(CompletionResponse::new(text)),
            Some(Err(message)) => Err(RouterError::Llm(message)),
            None => Err(RouterError::Llm("no scripted response left".to_string())),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn is_ready(&self) -> bool {
        true
    }
}
