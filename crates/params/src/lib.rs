//! Constant values for montdh cryptographic operations
//!
//! This library holds the raw, published constants of the Montgomery curves
//! used by montdh. Derived arithmetic constants are computed from these by
//! `montdh-algorithms`.

#![no_std]

// Traditional algorithm constants
pub mod traditional;
