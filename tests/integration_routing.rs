//! End-to-end routing tests
//!
//! Drives prompts through the routing agent and console sessions with a
//! scripted mock LLM client.

use std::io::Cursor;
use std::sync::Arc;

use serde_json::json;
use toolroute::error::Result;
use toolroute::llm::{GenerationSettings, LlmClient, MockLlmClient};
use toolroute::router::{
    AgentSettings, ResolutionError, RoutingAgent, ToolCall, ToolDispatcher, parse_tool_call,
};
use toolroute::session;
use toolroute::tools::ToolRegistry;

fn agent_with(responses: &[&str]) -> (Arc<MockLlmClient>, RoutingAgent) {
    let mock = Arc::new(MockLlmClient::with_responses(responses.iter().copied()));
    let agent = RoutingAgent::new(mock.clone());
    (mock, agent)
}

/// Integration test: verify mock LLM client works
#[test]
fn test_mock_llm_client_creation() {
    let mock = MockLlmClient::new();
    assert!(mock.is_ready());
    assert_eq!(mock.model(), "mock-model");
}

/// Integration test: the standard catalog lists exactly the four tools
#[test]
fn test_standard_registry() {
    let registry = ToolRegistry::standard();
    assert_eq!(
        registry.names(),
        vec!["multiplication_tool", "vowel_counter", "text_summarizer", "text_funifier"]
    );

    let defs = registry.function_definitions();
    assert_eq!(defs.len(), 4);
    assert_eq!(defs[0].parameters["required"], json!(["numbers"]));
    assert_eq!(defs[0].parameters["properties"]["numbers"]["items"]["type"], "number");
}

/// Integration test: single-shot run prints the selection and the result
#[tokio::test]
async fn test_run_once_multiplication() -> Result<()> {
    let (mock, agent) =
        agent_with(&[r#"{"name":"multiplication_tool","parameters":{"numbers":[5,6]}}"#]);

    let mut out = Vec::new();
    session::run_once(&agent, "What is 5 times 6?", &mut out).await?;
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Tool to be called: multiplication_tool"));
    assert!(out.contains("Result: The product is 30"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("What is 5 times 6?"));
    assert!(requests[0].prompt.contains("vowel_counter"));
    Ok(())
}

/// Integration test: JSON wrapped in prose is salvaged
#[tokio::test]
async fn test_route_salvages_wrapped_json() -> Result<()> {
    let (_mock, agent) = agent_with(&[
        "Sure! Here is the call:\n```json\n{\"name\": \"vowel_counter\", \"parameters\": {\"text\": \"Hello World\"}}\n```",
    ]);

    let outcome = agent.route("How many vowels are in 'Hello World'?").await?;

    assert_eq!(outcome.message, "The number of vowels is 3");
    assert_eq!(outcome.call.map(|c| c.name).as_deref(), Some("vowel_counter"));
    Ok(())
}

/// Integration test: a reply without any braces never reaches a tool
#[tokio::test]
async fn test_route_reply_without_json() -> Result<()> {
    let (mock, agent) = agent_with(&["I cannot help with that."]);

    let outcome = agent.route("Tell me a story").await?;

    assert!(outcome.call.is_none());
    assert_eq!(outcome.message, "Error: No JSON found in response: I cannot help with that.");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

/// Integration test: an unknown tool name is reported, not executed
#[tokio::test]
async fn test_route_unknown_tool() -> Result<()> {
    let (mock, agent) = agent_with(&[r#"{"name":"weather_tool","parameters":{"city":"Oslo"}}"#]);

    let outcome = agent.route("What's the weather in Oslo?").await?;

    assert_eq!(outcome.message, "Unknown tool: weather_tool");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

/// Integration test: text tools make a second model call with their own settings
#[tokio::test]
async fn test_route_summarizer_uses_configured_settings() -> Result<()> {
    let mock = Arc::new(MockLlmClient::with_responses([
        r#"{"name":"text_summarizer","parameters":{"text":"Rust is a systems language focused on safety."}}"#,
        "\"Rust is a safe systems language.\"",
    ]));
    let settings = AgentSettings {
        summarizer: GenerationSettings::new(0.2, 60),
        ..AgentSettings::default()
    };
    let agent = RoutingAgent::with_settings(mock.clone(), settings);

    let outcome = agent.route("Summarize: Rust is a systems language focused on safety.").await?;

    assert_eq!(outcome.message, "Summary: Rust is a safe systems language.");
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].max_output_tokens, 100);
    assert_eq!(requests[1].temperature, 0.2);
    assert_eq!(requests[1].max_output_tokens, 60);
    Ok(())
}

/// Integration test: dispatcher used directly, independent of resolution
#[tokio::test]
async fn test_dispatch_direct() {
    let mock = Arc::new(MockLlmClient::new());
    let dispatcher = ToolDispatcher::new(mock.clone());

    let product = dispatcher
        .dispatch(&ToolCall::new("multiplication_tool", json!({"numbers": [2, 3, 4]})))
        .await;
    assert_eq!(product, "The product is 24");

    let missing = dispatcher
        .dispatch(&ToolCall::new("vowel_counter", json!({})))
        .await;
    assert!(missing.starts_with("Error executing tool:"));
    assert!(missing.contains("text"));

    assert_eq!(mock.call_count(), 0);
}

/// Integration test: parsing edge cases from the public API
#[test]
fn test_parse_tool_call_public() {
    let call = parse_tool_call(r#"{"name":"text_funifier","parameters":{"text":"hi"}}"#).unwrap();
    assert_eq!(call.name, "text_funifier");

    assert!(matches!(
        parse_tool_call("no braces here"),
        Err(ResolutionError::NoJson { .. })
    ));
    assert!(matches!(parse_tool_call("{broken"), Err(ResolutionError::NoJson { .. })));
    assert!(matches!(
        parse_tool_call(r#"{"parameters":{}}"#),
        Err(ResolutionError::InvalidFormat { .. })
    ));
}

/// Integration test: interactive session runs until `quit`
#[tokio::test]
async fn test_interactive_session() -> Result<()> {
    let (mock, agent) =
        agent_with(&[r#"{"name":"multiplication_tool","parameters":{"numbers":[7,3]}}"#]);

    let input = Cursor::new("What is 7 times 3?\nquit\n");
    let mut out = Vec::new();
    session::run_interactive(&agent, input, &mut out).await?;
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with(session::BANNER));
    assert!(out.contains("Result: The product is 21"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

/// Integration test: a failed model call during resolution ends the session
#[tokio::test]
async fn test_interactive_session_oracle_failure() {
    let mock = Arc::new(MockLlmClient::new());
    mock.push_error("service unavailable");
    let agent = RoutingAgent::new(mock.clone());

    let input = Cursor::new("What is 2 times 2?\nWhat is 3 times 3?\n");
    let mut out = Vec::new();
    let result = session::run_interactive(&agent, input, &mut out).await;

    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
}
