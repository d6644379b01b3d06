//! Tool-schema injection for backends without native tool calling.
//!
//! Renders a tool catalog into system-prompt prose: the base system text,
//! followed by one JSON-serialized schema per tool, followed by a fixed
//! instruction describing the expected tool-call response shape.

use crate::tool::ToolDefinition;

/// Line introducing the serialized tool schemas.
const TOOLS_PREAMBLE: &str = "You have access to the following tools:";

/// Fixed response-format instruction appended after the schemas.
const RESPONSE_FORMAT: &str = r#"To use a tool, respond with a JSON object with the following structure: {"tool": <name of the called tool>, "tool_input": <parameters for the tool, matching the tool's JSON schema>}"#;

/// Augment `system` with a textual rendering of the tool catalog.
///
/// When `tool_choice` is set the catalog is restricted to the tool with that
/// exact name. With no tools selected (absent catalog, empty catalog, or no
/// name match) the base text is returned unchanged.
pub fn inject_tools_schema_into_system(
    system: &str,
    tool_choice: Option<&str>,
    tools: Option<&[ToolDefinition]>,
) -> String {
    let selected: Vec<&ToolDefinition> = tools
        .unwrap_or_default()
        .iter()
        .filter(|tool| tool_choice.is_none_or(|choice| tool.name == choice))
        .collect();

    if selected.is_empty() {
        return system.to_string();
    }

    let schemas = selected
        .iter()
        .map(|tool| serde_json::to_string(tool).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    [system, TOOLS_PREAMBLE, &schemas, RESPONSE_FORMAT].join("\n\n")
}
