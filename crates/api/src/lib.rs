//! Public API traits and types for the montdh library
//!
//! This crate provides the public API surface shared by the montdh crates:
//! the error type, validation helpers used at every byte boundary, and the
//! key-agreement and serialization traits implemented by the X25519 and
//! X448 key types.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{KeyAgreement, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_agreement, serialize};
