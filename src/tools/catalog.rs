//! Tool registry
//!
//! Ordered catalog of tool descriptors. The order is the presentation order
//! shown to the model.

use serde_json::Value;

use crate::error::{Result, RouterError};

use super::definition::{FunctionDefinition, ToolSpec};
use super::kind::ToolKind;

/// Catalog of tool descriptors
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// The fixed catalog of built-in tools
    pub fn standard() -> Self {
        Self {
            tools: ToolKind::ALL.iter().map(|kind| kind.spec()).collect(),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// List all tool names in order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Function definitions for the model, with every parameter required
    pub fn function_definitions(&self) -> Vec<FunctionDefinition> {
        self.tools.iter().map(|t| t.to_function_definition()).collect()
    }

    /// Check that `parameters` carries every required key of tool `name`
    pub fn validate_parameters(&self, name: &str, parameters: &Value) -> Result<()> {
        let spec = self
            .get(name)
            .ok_or_else(|| RouterError::UnknownTool(name.to_string()))?;

        for field_name in spec.required() {
            if parameters.get(field_name).is_none() {
                return Err(RouterError::InvalidParameters {
                    tool: name.to_string(),
                    message: format!("missing required field: {}", field_name),
                });
            }
        }

        Ok(())
    }
}
