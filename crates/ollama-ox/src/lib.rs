//! Ollama Chat-Prompt Conversions
//!
//! This crate converts a vendor-neutral chat prompt (role-tagged turns with
//! typed content parts) into the message array the Ollama chat-completion API
//! expects. Ollama models have no native tool-calling field, so an available
//! tool catalog is rendered into the system message instead; the `"mistral"`
//! model family uses an inline bracket-instruction encoding and is handled by
//! its own encoder.

#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

pub mod convert;
pub mod error;
pub mod message;
pub mod prompt;
pub mod schema;
pub mod tool;

// Re-export main types
pub use convert::convert_to_ollama_messages;
pub use error::OllamaConversionError;
pub use message::{ChatMessage, Role};
pub use prompt::{ContentPart, ImageSource, Turn};
pub use schema::inject_tools_schema_into_system;
pub use tool::ToolDefinition;
