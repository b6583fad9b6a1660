use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Both variants are caller-input failures: generation itself does not fail
/// under well-formed input, and nothing is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
