//! Common implementations and shared functionality for the montdh library
//!
//! This crate provides the secret-memory types used by the scalar and key
//! wrappers of the other montdh crates.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
