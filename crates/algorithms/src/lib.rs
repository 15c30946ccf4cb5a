//! Montgomery-curve arithmetic with constant-time implementation
//!
//! This crate holds the curve-independent core shared by X25519 and X448:
//!
//! - [`field`]: prime-field arithmetic in Montgomery form, generic over the
//!   number of 64-bit limbs
//! - [`curve`]: the static parameter tables of Curve25519 and Curve448
//! - [`codec`]: little-endian decoding, u-coordinate masking, scalar clamping
//!   and canonical encoding
//! - [`ladder`]: the x-only Montgomery ladder
//!
//! Every routine that touches secret data runs a fixed sequence of field
//! operations, and all data-dependent choices go through masked selects
//! and swaps.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Prime-field arithmetic
pub mod field;
pub use field::{FieldElement, PrimeField};

// Curve tables
pub mod curve;
pub use curve::{CurveParameters, CURVE25519, CURVE448};

// Byte encodings of scalars and u-coordinates
pub mod codec;
pub use codec::Scalar;

// Montgomery ladder
pub mod ladder;
pub use ladder::{scalar_mult, ProjectivePoint};
