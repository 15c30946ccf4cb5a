//! Byte encodings of scalars and u-coordinates
//!
//! All encodings are little-endian and exactly `N` bytes long. Decoding a
//! u-coordinate masks the bits above the curve's coordinate width and then
//! reduces modulo p, so non-canonical values in `[p, 2^bits)` are accepted.
//! Encoding always produces the canonical representative.

use montdh_internal::endian::{load_le_limbs, store_le_limbs};

use crate::curve::CurveParameters;
use crate::error::{validate, Result};
use crate::field::FieldElement;

mod scalar;
pub use scalar::Scalar;

/// Interpret exactly `N` bytes as a little-endian integer
pub fn decode_little_endian<const LIMBS: usize, const N: usize>(
    _curve: &CurveParameters<LIMBS, N>,
    bytes: &[u8],
) -> Result<[u64; LIMBS]> {
    validate::length("little-endian integer", bytes.len(), N)?;
    Ok(load_le_limbs(bytes))
}

/// Encode an integer below 2^(8N) as `N` little-endian bytes
pub fn encode_little_endian<const LIMBS: usize, const N: usize>(
    _curve: &CurveParameters<LIMBS, N>,
    limbs: &[u64; LIMBS],
) -> [u8; N] {
    let mut out = [0u8; N];
    store_le_limbs(limbs, &mut out);
    out
}

/// Clear every bit at or above the curve's u-coordinate width
///
/// For X25519 this clears the top bit of the last byte; X448 uses all
/// 448 bits and is left untouched.
pub fn mask_u_coordinate<const LIMBS: usize, const N: usize>(
    curve: &CurveParameters<LIMBS, N>,
    bytes: &mut [u8; N],
) {
    let full_bytes = curve.u_coordinate_bits / 8;
    let rem_bits = curve.u_coordinate_bits % 8;
    if full_bytes < N {
        bytes[full_bytes] &= ((1u16 << rem_bits) - 1) as u8;
        for b in bytes[full_bytes + 1..].iter_mut() {
            *b = 0;
        }
    }
}

/// Decode a fixed-size u-coordinate: mask, then reduce modulo p
pub fn u_coordinate_from_bytes<const LIMBS: usize, const N: usize>(
    curve: &'static CurveParameters<LIMBS, N>,
    bytes: &[u8; N],
) -> FieldElement<LIMBS> {
    let mut masked = *bytes;
    mask_u_coordinate(curve, &mut masked);
    curve.field.from_limbs(&load_le_limbs(&masked))
}

/// Decode a u-coordinate from a slice of exactly `N` bytes
pub fn decode_u_coordinate<const LIMBS: usize, const N: usize>(
    curve: &'static CurveParameters<LIMBS, N>,
    bytes: &[u8],
) -> Result<FieldElement<LIMBS>> {
    validate::length("u-coordinate", bytes.len(), N)?;
    let mut buf = [0u8; N];
    buf.copy_from_slice(bytes);
    Ok(u_coordinate_from_bytes(curve, &buf))
}

/// Apply the RFC 7748 clamping rule in place
///
/// Clears the low `cofactor_bits` bits, clears every bit above
/// `scalar_top_bit` and sets `scalar_top_bit`. Clamping twice is the same
/// as clamping once.
pub fn clamp<const LIMBS: usize, const N: usize>(
    curve: &CurveParameters<LIMBS, N>,
    bytes: &mut [u8; N],
) {
    bytes[0] &= !((1u8 << curve.cofactor_bits) - 1);

    let top_byte = curve.scalar_top_bit / 8;
    let top_bit = curve.scalar_top_bit % 8;
    bytes[top_byte] &= ((1u16 << (top_bit + 1)) - 1) as u8;
    for b in bytes[top_byte + 1..].iter_mut() {
        *b = 0;
    }
    bytes[top_byte] |= 1u8 << top_bit;
}

/// Decode and clamp a private key given as a slice of exactly `N` bytes
pub fn decode_scalar<const LIMBS: usize, const N: usize>(
    curve: &CurveParameters<LIMBS, N>,
    bytes: &[u8],
) -> Result<Scalar<N>> {
    validate::length("scalar", bytes.len(), N)?;
    Ok(Scalar::from_slice_clamped(curve, bytes))
}

/// Canonical `N`-byte encoding of a field element
pub fn encode<const LIMBS: usize, const N: usize>(
    curve: &CurveParameters<LIMBS, N>,
    element: &FieldElement<LIMBS>,
) -> [u8; N] {
    encode_little_endian(curve, &element.to_canonical_limbs())
}
