//! Conversion from the vendor-neutral prompt model to Ollama chat messages.
//!
//! The conversion is a pure, single-pass transformation. Backend dialects
//! differ in how they encode individual turns, so each dialect is a
//! [`TurnEncoder`] implementation selected once by model identifier at the
//! boundary; the per-turn loop itself is dialect-agnostic.

use base64::Engine;

use crate::{
    error::OllamaConversionError,
    message::{ChatMessage, Role},
    prompt::{ContentPart, ImageSource, Turn},
    schema::inject_tools_schema_into_system,
    tool::ToolDefinition,
};

/// Model identifier of the bracket-instruction dialect.
const BRACKET_INSTRUCTION_MODEL: &str = "mistral";

/// Convert a prompt into the message array the Ollama chat endpoint expects.
///
/// `tools` is the optional catalog offered to the model and `tool_choice`
/// optionally restricts it to one tool by exact name match. `model` selects
/// the encoding dialect: `"mistral"` uses inline `[AVAILABLE_TOOLS]`/`[INST]`
/// brackets, every other identifier uses role-structured messages with the
/// tool schemas injected into the system message.
///
/// Turn order is preserved. When the prompt has no system turn but a tool
/// catalog was supplied, the role-structured dialect prepends a synthesized
/// system message carrying the schemas.
///
/// # Errors
///
/// Returns [`OllamaConversionError::UnsupportedFunctionality`] when a user
/// turn carries an image as an external URL reference; Ollama only accepts
/// inline image data. No partial output is returned.
pub fn convert_to_ollama_messages(
    prompt: &[Turn],
    tools: Option<&[ToolDefinition]>,
    tool_choice: Option<&str>,
    model: &str,
) -> Result<Vec<ChatMessage>, OllamaConversionError> {
    let encoder = encoder_for(model);

    let mut messages = Vec::with_capacity(prompt.len());
    let mut has_system = false;

    for turn in prompt {
        match turn {
            Turn::System { content } => {
                messages.push(encoder.system(content, tools, tool_choice));
                has_system = true;
            }
            Turn::User { content } => {
                messages.push(encoder.user(content, tools, tool_choice)?);
            }
            Turn::Assistant { content } => messages.push(encoder.assistant(content)),
            Turn::Tool { content } => messages.push(encoder.tool(content)),
        }
    }

    if !has_system && tools.is_some() {
        if let Some(message) = encoder.missing_system(tools, tool_choice) {
            messages.insert(0, message);
        }
    }

    Ok(messages)
}

/// Select the encoding dialect for a model identifier.
fn encoder_for(model: &str) -> &'static dyn TurnEncoder {
    match model {
        BRACKET_INSTRUCTION_MODEL => &BracketInstruction,
        _ => &RoleStructured,
    }
}

/// Encoding strategy for one backend dialect.
///
/// Assistant and tool turns encode identically across dialects and live in
/// default methods; system and user turns are where dialects diverge.
trait TurnEncoder {
    /// Encode a system turn.
    fn system(
        &self,
        text: &str,
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> ChatMessage;

    /// Encode a user turn.
    fn user(
        &self,
        parts: &[ContentPart],
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> Result<ChatMessage, OllamaConversionError>;

    /// Encode an assistant turn: text parts concatenated in order, anything
    /// else contributes nothing.
    fn assistant(&self, parts: &[ContentPart]) -> ChatMessage {
        let text: String = parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::Image { .. } => None,
            })
            .collect();

        ChatMessage::new(Role::Assistant, text)
    }

    /// Encode a tool-result turn: the opaque payload passes through verbatim.
    fn tool(&self, content: &str) -> ChatMessage {
        ChatMessage::new(Role::Tool, content)
    }

    /// Message prepended when the prompt had no system turn but a tool
    /// catalog was supplied, or `None` if this dialect never synthesizes one.
    fn missing_system(
        &self,
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> Option<ChatMessage>;
}

/// Default dialect: role-structured messages, tool schemas injected into the
/// system message.
struct RoleStructured;

impl TurnEncoder for RoleStructured {
    fn system(
        &self,
        text: &str,
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> ChatMessage {
        ChatMessage::new(
            Role::System,
            inject_tools_schema_into_system(text, tool_choice, tools),
        )
    }

    fn user(
        &self,
        parts: &[ContentPart],
        _tools: Option<&[ToolDefinition]>,
        _tool_choice: Option<&str>,
    ) -> Result<ChatMessage, OllamaConversionError> {
        let folded = fold_user_parts(parts)?;

        Ok(ChatMessage {
            role: Role::User,
            content: folded.text,
            images: folded.images,
        })
    }

    fn missing_system(
        &self,
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> Option<ChatMessage> {
        Some(ChatMessage::new(
            Role::System,
            inject_tools_schema_into_system("", tool_choice, tools),
        ))
    }
}

/// The `"mistral"` dialect: whole turns encoded as inline bracketed markers.
struct BracketInstruction;

impl TurnEncoder for BracketInstruction {
    fn system(
        &self,
        text: &str,
        _tools: Option<&[ToolDefinition]>,
        _tool_choice: Option<&str>,
    ) -> ChatMessage {
        // This dialect has no native system-role concept; the source text is
        // preserved verbatim rather than routed through schema injection.
        ChatMessage::new(Role::System, text)
    }

    fn user(
        &self,
        parts: &[ContentPart],
        tools: Option<&[ToolDefinition]>,
        tool_choice: Option<&str>,
    ) -> Result<ChatMessage, OllamaConversionError> {
        // The bracket text has no slot for images; inline images still ride
        // along in the `images` field, like the role-structured dialect.
        let folded = fold_user_parts(parts)?;

        let catalog = serde_json::to_string(&restrict_catalog(tools, tool_choice))
            .unwrap_or_default();

        Ok(ChatMessage {
            role: Role::User,
            content: format!(
                "[AVAILABLE_TOOLS] {catalog} [/AVAILABLE_TOOLS]\n[INST] {} [/INST]",
                folded.text
            ),
            images: folded.images,
        })
    }

    fn missing_system(
        &self,
        _tools: Option<&[ToolDefinition]>,
        _tool_choice: Option<&str>,
    ) -> Option<ChatMessage> {
        None
    }
}

/// Restrict a tool catalog to the chosen tool, by exact name equality.
///
/// `None` only when no catalog was supplied at all; a choice that matches
/// nothing yields an empty catalog, not an error.
fn restrict_catalog<'a>(
    tools: Option<&'a [ToolDefinition]>,
    tool_choice: Option<&str>,
) -> Option<Vec<&'a ToolDefinition>> {
    tools.map(|tools| {
        tools
            .iter()
            .filter(|tool| tool_choice.is_none_or(|choice| tool.name == choice))
            .collect()
    })
}

/// Result of folding a user turn's content parts.
#[derive(Debug)]
struct FoldedContent {
    /// All text parts concatenated in order, no separator.
    text: String,
    /// Base64-encoded inline images, in order; `None` when there were none.
    images: Option<Vec<String>>,
}

/// Fold content parts into concatenated text plus collected base64 images.
fn fold_user_parts(parts: &[ContentPart]) -> Result<FoldedContent, OllamaConversionError> {
    parts.iter().try_fold(
        FoldedContent {
            text: String::new(),
            images: None,
        },
        |mut folded, part| {
            match part {
                ContentPart::Text { text } => folded.text.push_str(text),
                ContentPart::Image {
                    image: ImageSource::Binary(data),
                } => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
                    folded.images.get_or_insert_with(Vec::new).push(encoded);
                }
                ContentPart::Image {
                    image: ImageSource::Url(_),
                } => {
                    return Err(OllamaConversionError::UnsupportedFunctionality("image-part"));
                }
            }
            Ok(folded)
        },
    )
}
