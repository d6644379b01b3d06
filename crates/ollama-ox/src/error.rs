/// Error types for conversion failures
#[derive(Debug, thiserror::Error)]
pub enum OllamaConversionError {
    /// The prompt uses a capability the Ollama chat format cannot express.
    /// Carries the functionality name for caller diagnostics.
    #[error("unsupported functionality: {0}")]
    UnsupportedFunctionality(&'static str),
}
