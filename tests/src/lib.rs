//! Test vectors and helpers shared by the montdh integration tests
pub mod vectors;

/// Decode a hex string of exactly `N` bytes
///
/// Panics on malformed input; only meant for test vectors.
pub fn unhex<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).expect("valid hex");
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    out
}
