//! Error type definitions for key-agreement operations

use thiserror::Error as ThisError;

/// Primary error type for key-agreement operations
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte buffer does not have the fixed length of the selected curve
    #[error("{context}: invalid encoding length (expected {expected}, got {actual})")]
    InvalidEncodingLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The shared secret is all-zero and the caller asked for such results to be rejected
    #[error("{context}: shared secret is not contributory")]
    NonContributory { context: &'static str },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncodingLength {
                expected, actual, ..
            } => Self::InvalidEncodingLength {
                context,
                expected,
                actual,
            },
            Self::NonContributory { .. } => Self::NonContributory { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
