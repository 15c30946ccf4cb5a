//! Validation utilities applied at the byte boundaries of the API

use super::types::{Error, Result};

/// Validate that `actual == expected`
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        log::warn!(
            "{}: rejected buffer of {} bytes (expected {})",
            context,
            actual,
            expected
        );
        return Err(Error::InvalidEncodingLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the length of `bytes` and copy it into a fixed-size array
///
/// Never pads or truncates: any length other than `N` is an error.
pub fn fixed_length<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
