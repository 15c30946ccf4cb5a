//! Typed keys for X25519 and X448
//!
//! All key types are fixed-size byte arrays of length `N`. Secret-bearing
//! types are backed by [`SecretBuffer`], wipe themselves on drop and never
//! print their contents.

use core::fmt;

use montdh_algorithms::codec::{self, Scalar};
use montdh_api::{error::validate, Result, ResultExt};
use montdh_common::SecretBuffer;
use montdh_internal::constant_time::ct_is_zero;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::engine::DiffieHellmanEngine;

/// A private key that can be used for any number of agreements
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StaticSecret<const N: usize>(SecretBuffer<N>);

impl<const N: usize> StaticSecret<N> {
    /// Fresh private key from a caller-supplied CSPRNG
    pub fn random_from_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut buf = SecretBuffer::zeroed();
        rng.fill_bytes(buf.as_mut_array());
        Self(buf)
    }

    /// Private key from exactly `N` bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Self)
            .with_context("private key")
    }

    /// Private key from an `N`-byte array
    pub fn from_array(bytes: [u8; N]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// The private key bytes as supplied, before clamping
    pub fn as_bytes(&self) -> &[u8; N] {
        self.0.as_array()
    }

    /// Copy of the private key bytes
    pub fn to_bytes(&self) -> [u8; N] {
        *self.0.as_array()
    }

    /// The scalar actually used by the ladder: the key after clamping
    pub fn clamped_bytes<const LIMBS: usize>(
        &self,
        engine: &DiffieHellmanEngine<LIMBS, N>,
    ) -> Zeroizing<[u8; N]> {
        let scalar = self.scalar(engine);
        Zeroizing::new(*scalar.as_bytes())
    }

    /// Public key belonging to this private key
    pub fn public_key<const LIMBS: usize>(
        &self,
        engine: &DiffieHellmanEngine<LIMBS, N>,
    ) -> PublicKey<N> {
        engine.public_key_for(&self.scalar(engine))
    }

    /// Raw shared secret with `peer`, subject to the engine's policy
    pub fn diffie_hellman<const LIMBS: usize>(
        &self,
        engine: &DiffieHellmanEngine<LIMBS, N>,
        peer: &PublicKey<N>,
    ) -> Result<SharedSecret<N>> {
        let u = codec::u_coordinate_from_bytes(engine.curve(), peer.as_bytes());
        engine.check_policy(engine.shared_secret_for(&self.scalar(engine), &u))
    }

    fn scalar<const LIMBS: usize>(&self, engine: &DiffieHellmanEngine<LIMBS, N>) -> Scalar<N> {
        Scalar::from_bytes_clamped(engine.curve(), self.0.as_array())
    }
}

impl<const N: usize> From<[u8; N]> for StaticSecret<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_array(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for StaticSecret<N> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<const N: usize> fmt::Debug for StaticSecret<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticSecret<{}>([REDACTED])", N)
    }
}

/// A public key: the encoded u-coordinate of a point
///
/// Any `N` bytes are accepted. Bits above the curve's coordinate width and
/// values at or above p are dealt with when the key is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey<const N: usize>([u8; N]);

impl<const N: usize> PublicKey<N> {
    /// Public key from exactly `N` bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::fixed_length::<N>("public key", bytes).map(Self)
    }

    /// Public key from an `N`-byte array
    pub fn from_array(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// The encoded public key
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Copy of the encoded public key
    pub fn to_bytes(&self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> From<[u8; N]> for PublicKey<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for PublicKey<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for PublicKey<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::PublicKey;
    use core::fmt;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<const N: usize> Serialize for PublicKey<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }

    struct PublicKeyVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for PublicKeyVisitor<N> {
        type Value = PublicKey<N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} bytes", N)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            if v.len() != N {
                return Err(E::invalid_length(v.len(), &self));
            }
            let mut out = [0u8; N];
            out.copy_from_slice(v);
            Ok(PublicKey(out))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = [0u8; N];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            }
            if seq.next_element::<u8>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(PublicKey(out))
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for PublicKey<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(PublicKeyVisitor::<N>)
        }
    }
}

/// Raw output of one key agreement
///
/// Equality is constant time. The bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret<const N: usize>(SecretBuffer<N>);

impl<const N: usize> SharedSecret<N> {
    pub(crate) fn from_array(bytes: [u8; N]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// The shared secret bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        self.0.as_array()
    }

    /// Copy of the shared secret bytes
    pub fn to_bytes(&self) -> [u8; N] {
        *self.0.as_array()
    }

    /// False when the secret is all zero, i.e. the peer key had small order
    pub fn was_contributory(&self) -> bool {
        !bool::from(ct_is_zero(self.0.as_slice()))
    }
}

impl<const N: usize> AsRef<[u8]> for SharedSecret<N> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<const N: usize> ConstantTimeEq for SharedSecret<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const N: usize> PartialEq for SharedSecret<N> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<const N: usize> Eq for SharedSecret<N> {}

impl<const N: usize> fmt::Debug for SharedSecret<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret<{}>([REDACTED])", N)
    }
}

/// A private key together with its public key
#[derive(Clone, Debug)]
pub struct KeyPair<const N: usize> {
    secret: StaticSecret<N>,
    public: PublicKey<N>,
}

impl<const N: usize> KeyPair<N> {
    /// Fresh key pair from a caller-supplied CSPRNG
    pub fn generate<const LIMBS: usize, R: CryptoRng + RngCore>(
        engine: &DiffieHellmanEngine<LIMBS, N>,
        rng: &mut R,
    ) -> Self {
        Self::from_secret(engine, StaticSecret::random_from_rng(rng))
    }

    /// Key pair for an existing private key
    pub fn from_secret<const LIMBS: usize>(
        engine: &DiffieHellmanEngine<LIMBS, N>,
        secret: StaticSecret<N>,
    ) -> Self {
        let public = secret.public_key(engine);
        Self { secret, public }
    }

    /// The private key
    pub fn secret(&self) -> &StaticSecret<N> {
        &self.secret
    }

    /// The public key
    pub fn public(&self) -> &PublicKey<N> {
        &self.public
    }
}

impl<const N: usize> montdh_api::Serialize for PublicKey<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl<const N: usize> montdh_api::SerializeSecret for StaticSecret<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        StaticSecret::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl<const N: usize> montdh_api::SerializeSecret for SharedSecret<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Self)
            .with_context("shared secret")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}
