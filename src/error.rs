//! Errors surfaced by the encoding primitives
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A value that is negative, not a number, or otherwise not representable
    /// as an unsigned integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The value needs more limbs than the requested fixed width.
    #[error("value needs {needed} limbs but only {size} are available")]
    Overflow { needed: usize, size: usize },
}

impl EncodingError {
    pub(crate) fn invalid(msg: impl ToString) -> Self {
        EncodingError::InvalidInput(msg.to_string())
    }
}
