//! Curve selection at runtime
//!
//! For callers that only learn the curve from configuration or from the
//! wire. Keys go in as slices and come out as vectors; lengths are checked
//! against the selected curve.

use core::fmt;
use core::str::FromStr;

use montdh_api::{Error, Result};
use zeroize::Zeroizing;

use crate::engine::{X25519Engine, X448Engine};
use crate::policy::LowOrderPolicy;

/// One of the RFC 7748 curves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// Curve25519, 32-byte keys
    X25519,
    /// Curve448, 56-byte keys
    X448,
}

impl CurveId {
    /// Both curves
    pub const ALL: [CurveId; 2] = [CurveId::X25519, CurveId::X448];

    /// Length in bytes of keys and shared secrets
    pub const fn key_size(self) -> usize {
        match self {
            CurveId::X25519 => 32,
            CurveId::X448 => 56,
        }
    }

    /// Canonical name, "X25519" or "X448"
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::X25519 => "X25519",
            CurveId::X448 => "X448",
        }
    }

    /// Encoding of the base point
    pub fn base_point(self) -> Vec<u8> {
        match self {
            CurveId::X25519 => X25519Engine::x25519().base_point().to_bytes().to_vec(),
            CurveId::X448 => X448Engine::x448().base_point().to_bytes().to_vec(),
        }
    }

    /// Public key of `private_key` on this curve
    pub fn derive_public_key(self, private_key: &[u8]) -> Result<Vec<u8>> {
        match self {
            CurveId::X25519 => X25519Engine::x25519()
                .derive_public_key(private_key)
                .map(|pk| pk.to_bytes().to_vec()),
            CurveId::X448 => X448Engine::x448()
                .derive_public_key(private_key)
                .map(|pk| pk.to_bytes().to_vec()),
        }
    }

    /// Raw shared secret on this curve with the default policy
    pub fn compute_shared_secret(
        self,
        private_key: &[u8],
        peer_public_key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.compute_shared_secret_with_policy(
            private_key,
            peer_public_key,
            LowOrderPolicy::default(),
        )
    }

    /// Raw shared secret on this curve under `policy`
    pub fn compute_shared_secret_with_policy(
        self,
        private_key: &[u8],
        peer_public_key: &[u8],
        policy: LowOrderPolicy,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            CurveId::X25519 => X25519Engine::x25519()
                .with_low_order_policy(policy)
                .compute_shared_secret(private_key, peer_public_key)
                .map(|ss| Zeroizing::new(ss.as_bytes().to_vec())),
            CurveId::X448 => X448Engine::x448()
                .with_low_order_policy(policy)
                .compute_shared_secret(private_key, peer_public_key)
                .map(|ss| Zeroizing::new(ss.as_bytes().to_vec())),
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Accepts "X25519" / "Curve25519" and "X448" / "Curve448", any case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x25519" | "curve25519" => Ok(CurveId::X25519),
            "x448" | "curve448" => Ok(CurveId::X448),
            _ => Err(Error::param("curve name", format!("unknown curve '{}'", s))),
        }
    }
}
