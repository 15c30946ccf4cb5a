//! Validation utilities for the byte decoders

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        log::warn!(
            "{}: rejected buffer of {} bytes (expected {})",
            context,
            actual,
            expected
        );
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
