//! # montdh
//!
//! Constant-time X25519 and X448 Diffie-Hellman key agreement (RFC 7748).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! montdh = "0.3"
//! ```
//!
//! ```
//! use montdh::prelude::*;
//!
//! let engine = X25519Engine::x25519();
//! let alice_private = [0x11u8; 32];
//! let bob_private = [0x22u8; 32];
//! let alice = engine.derive_public_key(&alice_private)?;
//! let bob = engine.derive_public_key(&bob_private)?;
//!
//! let ab = engine.compute_shared_secret(&alice_private, bob.as_bytes())?;
//! let ba = engine.compute_shared_secret(&bob_private, alice.as_bytes())?;
//! assert_eq!(ab, ba);
//! # Ok::<(), montdh::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support for `rand`
//! - `serde`: `Serialize` / `Deserialize` for public keys
//! - `op-trace`: per-thread field operation counters, for checking that
//!   the ladder's operation sequence does not depend on the scalar
//! - `rand`: re-export `rand` for key generation
//! - `full`: `std`, `serde` and `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`montdh-api`]: error type and public traits
//! - [`montdh-params`]: published curve constants
//! - [`montdh-algorithms`]: field arithmetic, codec and Montgomery ladder
//! - [`montdh-kex`]: engine, typed keys and runtime curve selection

#![forbid(unsafe_code)]

// Core re-exports
pub use montdh_algorithms as algorithms;
pub use montdh_api as api;
pub use montdh_common as common;
pub use montdh_internal as internal;
pub use montdh_kex as kex;
pub use montdh_params as params;

pub use montdh_kex::{x25519, x448, X25519_BASEPOINT_BYTES, X448_BASEPOINT_BYTES};

// Ecosystem crates appearing in the public API
#[cfg(feature = "rand")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for montdh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    // Engines, keys and curve selection
    pub use crate::kex::{
        CurveId, DiffieHellmanEngine, KeyPair, LowOrderPolicy, PublicKey, SharedSecret,
        StaticSecret, X25519Engine, X448Engine, X25519, X448,
    };
}
