//! Diffie-Hellman over a Montgomery curve
//!
//! [`DiffieHellmanEngine`] is a small `Copy` value: a reference to a static
//! curve table plus the low-order policy. It holds no secrets and no
//! mutable state, so it can be shared freely between threads.

use montdh_algorithms::codec::{self, Scalar};
use montdh_algorithms::error::to_core_result;
use montdh_algorithms::{scalar_mult, CurveParameters, CURVE25519, CURVE448};
use montdh_api::{Error, Result};
use montdh_internal::constant_time::ct_is_zero;
use montdh_params::traditional::ecdh::{
    CURVE25519_FIELD_LIMBS, CURVE448_FIELD_LIMBS, X25519_KEY_SIZE, X448_KEY_SIZE,
};

use crate::keys::{PublicKey, SharedSecret};
use crate::policy::LowOrderPolicy;

/// Key-agreement engine for one curve
///
/// `LIMBS` is the number of 64-bit limbs of a field element and `N` the
/// byte length of every key and secret.
#[derive(Clone, Copy, Debug)]
pub struct DiffieHellmanEngine<const LIMBS: usize, const N: usize> {
    curve: &'static CurveParameters<LIMBS, N>,
    policy: LowOrderPolicy,
}

/// Engine for X25519
pub type X25519Engine = DiffieHellmanEngine<CURVE25519_FIELD_LIMBS, X25519_KEY_SIZE>;

/// Engine for X448
pub type X448Engine = DiffieHellmanEngine<CURVE448_FIELD_LIMBS, X448_KEY_SIZE>;

impl X25519Engine {
    /// X25519 engine with the default policy
    pub fn x25519() -> Self {
        Self::new(&CURVE25519)
    }
}

impl X448Engine {
    /// X448 engine with the default policy
    pub fn x448() -> Self {
        Self::new(&CURVE448)
    }
}

impl<const LIMBS: usize, const N: usize> DiffieHellmanEngine<LIMBS, N> {
    /// Engine for `curve` with [`LowOrderPolicy::Allow`]
    pub fn new(curve: &'static CurveParameters<LIMBS, N>) -> Self {
        log::debug!("{}: engine ready ({} byte keys)", curve.name, N);
        Self {
            curve,
            policy: LowOrderPolicy::default(),
        }
    }

    /// The same engine with a different low-order policy
    pub fn with_low_order_policy(self, policy: LowOrderPolicy) -> Self {
        log::debug!("{}: low-order policy set to {:?}", self.curve.name, policy);
        Self { policy, ..self }
    }

    /// The active low-order policy
    pub fn low_order_policy(&self) -> LowOrderPolicy {
        self.policy
    }

    /// Curve name, "X25519" or "X448"
    pub fn name(&self) -> &'static str {
        self.curve.name
    }

    /// Length in bytes of private keys, public keys and shared secrets
    pub fn key_size(&self) -> usize {
        N
    }

    /// The curve table driving this engine
    pub fn curve(&self) -> &'static CurveParameters<LIMBS, N> {
        self.curve
    }

    /// Encoding of the base point
    pub fn base_point(&self) -> PublicKey<N> {
        PublicKey::from_array(self.curve.base_point_bytes())
    }

    /// Public key of `private_key`: the ladder applied to the base point
    ///
    /// Fails with `InvalidEncodingLength` unless `private_key` has exactly
    /// `N` bytes. Any `N`-byte value is a valid private key; it is clamped
    /// before use.
    pub fn derive_public_key(&self, private_key: &[u8]) -> Result<PublicKey<N>> {
        let scalar = to_core_result(codec::decode_scalar(self.curve, private_key), "private key")?;
        Ok(self.public_key_for(&scalar))
    }

    /// Raw shared secret of `private_key` and `peer_public_key`
    ///
    /// Fails with `InvalidEncodingLength` unless both buffers have exactly
    /// `N` bytes. The peer key is masked and reduced, never rejected. An
    /// all-zero result is returned as is, unless the engine was configured
    /// with [`LowOrderPolicy::RejectNonContributory`].
    pub fn compute_shared_secret(
        &self,
        private_key: &[u8],
        peer_public_key: &[u8],
    ) -> Result<SharedSecret<N>> {
        let scalar = to_core_result(codec::decode_scalar(self.curve, private_key), "private key")?;
        let u = to_core_result(
            codec::decode_u_coordinate(self.curve, peer_public_key),
            "peer public key",
        )?;
        self.check_policy(self.shared_secret_for(&scalar, &u))
    }

    /// The RFC 7748 function on fixed-size arrays, ignoring the policy
    pub fn scalar_mult_bytes(&self, k: &[u8; N], u: &[u8; N]) -> [u8; N] {
        let scalar = Scalar::from_bytes_clamped(self.curve, k);
        let u = codec::u_coordinate_from_bytes(self.curve, u);
        codec::encode(self.curve, &scalar_mult(self.curve, &u, &scalar))
    }

    pub(crate) fn public_key_for(&self, scalar: &Scalar<N>) -> PublicKey<N> {
        let base = self.curve.base_point();
        PublicKey::from_array(codec::encode(
            self.curve,
            &scalar_mult(self.curve, &base, scalar),
        ))
    }

    pub(crate) fn shared_secret_for(
        &self,
        scalar: &Scalar<N>,
        u: &montdh_algorithms::FieldElement<LIMBS>,
    ) -> SharedSecret<N> {
        SharedSecret::from_array(codec::encode(self.curve, &scalar_mult(self.curve, u, scalar)))
    }

    pub(crate) fn check_policy(&self, secret: SharedSecret<N>) -> Result<SharedSecret<N>> {
        if self.policy.rejects_non_contributory() && bool::from(ct_is_zero(secret.as_bytes())) {
            log::warn!(
                "{}: rejected non-contributory shared secret",
                self.curve.name
            );
            return Err(Error::NonContributory {
                context: "shared secret",
            });
        }
        Ok(secret)
    }
}
