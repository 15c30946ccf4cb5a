//! Error handling for the arithmetic core

use core::fmt;

use montdh_api::{Error as CoreError, Result as CoreResult};

/// The error type for the arithmetic core
///
/// The only fallible operations here are the byte decoders: field and
/// ladder arithmetic is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for the arithmetic core
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidEncodingLength {
                context,
                expected,
                actual,
            },
        }
    }
}

/// Convert a core result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
