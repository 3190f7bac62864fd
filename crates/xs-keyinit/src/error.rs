//! Error types for xs-keyinit.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private exponents and shared secrets are never included in error messages.

/// Key agreement error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum KeyAgreementError {
    /// Raised only at construction: unparseable, non-prime or too-small
    /// modulus, or a generator outside `(0, modulus)`.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A peer-supplied public value is not a non-negative decimal integer.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Key agreement session has been disposed")]
    Disposed,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, KeyAgreementError>;
