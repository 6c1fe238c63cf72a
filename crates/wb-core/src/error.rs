//! Error types for the core character model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or parsing core types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A class name did not match any known character class.
    #[error("unknown character class: \"{0}\"")]
    UnknownClass(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
