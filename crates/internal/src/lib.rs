//! Internal utilities for the montdh library
//!
//! Nothing in this crate is part of the public API contract. It holds the
//! small constant-time and byte-order helpers shared by the field, ladder and
//! key types.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
