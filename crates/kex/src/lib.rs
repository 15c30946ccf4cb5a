//! X25519 and X448 Diffie-Hellman key agreement (RFC 7748)
//!
//! This crate puts the byte-level interface on top of the Montgomery ladder
//! in `montdh-algorithms`:
//!
//! - [`engine::DiffieHellmanEngine`]: one engine type for both curves, with
//!   `derive_public_key` and `compute_shared_secret` on raw byte slices
//! - typed keys ([`StaticSecret`], [`PublicKey`], [`SharedSecret`],
//!   [`KeyPair`]) that wipe their secrets on drop
//! - the marker types [`X25519`] and [`X448`] implementing
//!   [`montdh_api::KeyAgreement`], and the bare RFC functions [`x25519`]
//!   and [`x448`]
//! - [`CurveId`] for selecting the curve at runtime
//!
//! The shared secret is returned raw. Callers should feed it through a KDF
//! before using it as a key.

#![forbid(unsafe_code)]

pub mod curves;
pub mod dynamic;
pub mod engine;
pub mod keys;
pub mod policy;

// Re-exports
pub use curves::{x25519, x448, X25519, X25519_BASEPOINT_BYTES, X448, X448_BASEPOINT_BYTES};
pub use dynamic::CurveId;
pub use engine::{DiffieHellmanEngine, X25519Engine, X448Engine};
pub use keys::{KeyPair, PublicKey, SharedSecret, StaticSecret};
pub use policy::LowOrderPolicy;
