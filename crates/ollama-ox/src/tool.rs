use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named capability offered to the model, with its invocation schema.
///
/// Ollama has no native tool-calling field, so this definition is never sent
/// as structured request data; its JSON form is rendered into the system
/// message (or into the `[AVAILABLE_TOOLS]` block for bracket-instruction
/// models).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct ToolDefinition {
    pub r#type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            r#type: "function".to_string(),
            name: name.into(),
            description: None,
            parameters: Value::Null,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }
}
