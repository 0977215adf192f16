//! Tool descriptors and the function-definition format sent to the model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Element type of an array parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSchema {
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Schema fragment for one tool parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSchema {
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemSchema>,
    pub description: String,
}

impl ParamSchema {
    /// A scalar parameter such as "string" or "number"
    pub fn scalar(param_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            param_type: param_type.into(),
            items: None,
            description: description.into(),
        }
    }

    /// An "array" parameter whose elements have `item_type`
    pub fn array_of(item_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            param_type: "array".to_string(),
            items: Some(ItemSchema {
                item_type: item_type.into(),
            }),
            description: description.into(),
        }
    }
}

/// Immutable descriptor of a routable tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Unique identifier the model must reply with
    pub name: String,
    /// Human/model-facing description
    pub description: String,
    /// Parameters in presentation order
    pub parameters: Vec<(String, ParamSchema)>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn with_param(mut self, name: impl Into<String>, schema: ParamSchema) -> Self {
        self.parameters.push((name.into(), schema));
        self
    }

    /// Names of all parameters; every one of them is required
    pub fn required(&self) -> Vec<&str> {
        self.parameters.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Convert to the function-definition format shown to the model
    pub fn to_function_definition(&self) -> FunctionDefinition {
        let mut properties = Map::new();
        for (name, schema) in &self.parameters {
            properties.insert(
                name.clone(),
                serde_json::to_value(schema).unwrap_or(Value::Null),
            );
        }

        FunctionDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": properties,
                "required": self.required(),
            }),
        }
    }
}

/// Model-consumable function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}
