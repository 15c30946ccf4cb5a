//! Constants for Diffie-Hellman over Montgomery curves (RFC 7748)
//!
//! Curves are given in the form `v^2 = u^3 + A*u^2 + u` over `GF(p)`.
//! Primes are stored as little-endian 64-bit limbs.

/// Size of an X25519 private key, public key and shared secret in bytes
pub const X25519_KEY_SIZE: usize = 32;

/// Size of an X448 private key, public key and shared secret in bytes
pub const X448_KEY_SIZE: usize = 56;

/// Number of 64-bit limbs of a Curve25519 field element
pub const CURVE25519_FIELD_LIMBS: usize = 4;

/// Number of 64-bit limbs of a Curve448 field element
pub const CURVE448_FIELD_LIMBS: usize = 7;

/// Published constants of one Montgomery curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontgomeryCurveParams<const LIMBS: usize> {
    /// Curve name
    pub name: &'static str,

    /// Field prime p, little-endian limbs
    pub p: [u64; LIMBS],

    /// Curve coefficient A
    pub a: u64,

    /// Ladder constant (A - 2) / 4
    pub a24: u64,

    /// Number of ladder iterations (bits of the clamped scalar)
    pub ladder_bits: usize,

    /// u-coordinate of the base point
    pub base_u: u64,

    /// log2 of the cofactor; this many low scalar bits are cleared
    pub cofactor_bits: u32,

    /// Scalar bit forced to one; every higher bit is cleared
    pub scalar_top_bit: usize,

    /// Number of meaningful bits in an encoded u-coordinate
    pub u_coordinate_bits: usize,
}

/// Curve25519: p = 2^255 - 19, A = 486662, cofactor 8
pub const CURVE25519: MontgomeryCurveParams<CURVE25519_FIELD_LIMBS> = MontgomeryCurveParams {
    name: "X25519",
    p: [
        0xFFFF_FFFF_FFFF_FFED,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0x7FFF_FFFF_FFFF_FFFF,
    ],
    a: 486_662,
    a24: 121_665,
    ladder_bits: 255,
    base_u: 9,
    cofactor_bits: 3,
    scalar_top_bit: 254,
    u_coordinate_bits: 255,
};

/// Curve448: p = 2^448 - 2^224 - 1, A = 156326, cofactor 4
pub const CURVE448: MontgomeryCurveParams<CURVE448_FIELD_LIMBS> = MontgomeryCurveParams {
    name: "X448",
    p: [
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFE_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ],
    a: 156_326,
    a24: 39_081,
    ladder_bits: 448,
    base_u: 5,
    cofactor_bits: 2,
    scalar_top_bit: 447,
    u_coordinate_bits: 448,
};
