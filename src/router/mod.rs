//! Request routing - intent resolution and tool dispatch

mod agent;
mod dispatcher;
mod resolver;

pub use agent::{AgentSettings, RouteOutcome, RoutingAgent};
pub use dispatcher::ToolDispatcher;
pub use resolver::{IntentResolver, Resolution, ResolutionError, ToolCall, parse_tool_call};

pub mod defaults {
    pub use super::resolver::DEFAULT_SETTINGS as RESOLVER;
}
