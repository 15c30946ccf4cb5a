//! Static parameter tables for the RFC 7748 curves
//!
//! A [`CurveParameters`] value is everything the codec and the ladder need
//! to know about one curve. Both tables are built in constant context from
//! the published constants in `montdh-params`, so a malformed table fails
//! the build rather than a handshake.

use montdh_params::traditional::ecdh::{self as published, MontgomeryCurveParams};

use crate::field::{FieldElement, PrimeField};

/// Curve description consumed by the codec and the ladder
///
/// `LIMBS` is the number of 64-bit limbs of a field element and `N` the
/// byte length of scalars, u-coordinates and shared secrets.
#[derive(Debug)]
pub struct CurveParameters<const LIMBS: usize, const N: usize> {
    /// Curve name, e.g. "X25519"
    pub name: &'static str,
    /// Base field GF(p)
    pub field: PrimeField<LIMBS>,
    /// Ladder constant (A - 2) / 4
    pub a24: u64,
    /// Number of ladder iterations
    pub ladder_bits: usize,
    /// u-coordinate of the base point
    pub base_point_u: u64,
    /// Number of low scalar bits cleared by clamping
    pub cofactor_bits: u32,
    /// Scalar bit set by clamping; higher bits are cleared
    pub scalar_top_bit: usize,
    /// Number of meaningful bits of an encoded u-coordinate
    pub u_coordinate_bits: usize,
}

impl<const LIMBS: usize, const N: usize> CurveParameters<LIMBS, N> {
    /// Build and check a curve table from published constants
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a static) if the constants are
    /// inconsistent with each other or with `LIMBS` and `N`.
    pub const fn new(raw: &MontgomeryCurveParams<LIMBS>) -> Self {
        assert!(N == 8 * LIMBS, "encoding length must cover the limbs exactly");
        assert!(raw.a24 * 4 + 2 == raw.a, "a24 must equal (A - 2) / 4");
        assert!(raw.ladder_bits <= 8 * N, "ladder runs past the scalar");
        assert!(
            raw.scalar_top_bit < raw.ladder_bits,
            "clamped top bit must be visited by the ladder"
        );
        assert!(raw.u_coordinate_bits <= 8 * N, "u-coordinate wider than its encoding");
        assert!(raw.cofactor_bits < 8, "cofactor bits must fit in the first byte");

        Self {
            name: raw.name,
            field: PrimeField::new(raw.p),
            a24: raw.a24,
            ladder_bits: raw.ladder_bits,
            base_point_u: raw.base_u,
            cofactor_bits: raw.cofactor_bits,
            scalar_top_bit: raw.scalar_top_bit,
            u_coordinate_bits: raw.u_coordinate_bits,
        }
    }

    /// Byte length of scalars, u-coordinates and shared secrets
    pub const fn key_size(&self) -> usize {
        N
    }

    /// u-coordinate of the base point as a field element
    pub fn base_point(&'static self) -> FieldElement<LIMBS> {
        self.field.from_u64(self.base_point_u)
    }

    /// Ladder constant as a field element
    pub fn a24(&'static self) -> FieldElement<LIMBS> {
        self.field.from_u64(self.a24)
    }

    /// Canonical encoding of the base point
    pub fn base_point_bytes(&self) -> [u8; N] {
        let mut out = [0u8; N];
        out[..8].copy_from_slice(&self.base_point_u.to_le_bytes());
        out
    }
}

/// Curve25519 as used by X25519
pub static CURVE25519: CurveParameters<
    { published::CURVE25519_FIELD_LIMBS },
    { published::X25519_KEY_SIZE },
> = CurveParameters::new(&published::CURVE25519);

/// Curve448 as used by X448
pub static CURVE448: CurveParameters<
    { published::CURVE448_FIELD_LIMBS },
    { published::X448_KEY_SIZE },
> = CurveParameters::new(&published::CURVE448);
