//! Vendor-neutral prompt model: the input side of the conversion.
//!
//! A prompt is an ordered sequence of role-tagged [`Turn`]s. Conversation
//! order is semantically significant and is preserved by the conversion.

use bytes::Bytes;
use url::Url;

/// One role-tagged message in the abstract conversation representation.
///
/// The role set is closed, so conversions over a `Turn` are total; there is
/// no "unknown role" runtime path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Instructions for the model, a single text blob.
    System { content: String },
    /// End-user input, an ordered sequence of typed content parts.
    User { content: Vec<ContentPart> },
    /// A prior model reply; only text parts are representable for Ollama.
    Assistant { content: Vec<ContentPart> },
    /// A tool execution result, an opaque backend-shaped payload passed
    /// through verbatim.
    Tool { content: String },
}

impl Turn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    /// Create a user turn from content parts.
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self::User { content }
    }

    /// Create an assistant turn from content parts.
    pub fn assistant(content: Vec<ContentPart>) -> Self {
        Self::Assistant { content }
    }

    /// Create a tool-result turn from an opaque payload.
    pub fn tool(content: impl Into<String>) -> Self {
        Self::Tool {
            content: content.into(),
        }
    }
}

/// One typed fragment of a turn's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// Plain text.
    Text { text: String },
    /// An image, inline or referenced.
    Image { image: ImageSource },
}

impl ContentPart {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image part from inline binary data.
    pub fn image_binary(data: impl Into<Bytes>) -> Self {
        Self::Image {
            image: ImageSource::Binary(data.into()),
        }
    }

    /// Create an image part referencing an external URL.
    pub fn image_url(url: Url) -> Self {
        Self::Image {
            image: ImageSource::Url(url),
        }
    }
}

impl From<&str> for ContentPart {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ContentPart {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

/// Where an image's bytes live.
///
/// Only inline binary payloads can be carried to Ollama; URL references are
/// rejected by the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw image bytes supplied inline.
    Binary(Bytes),
    /// An external reference to the image.
    Url(Url),
}
