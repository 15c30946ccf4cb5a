//! X25519 and X448 as concrete key-agreement schemes

use montdh_api::{KeyAgreement, Result};
use rand::{CryptoRng, RngCore};

use crate::engine::{X25519Engine, X448Engine};
use crate::keys::{KeyPair, PublicKey, SharedSecret, StaticSecret};

/// Encoding of the X25519 base point, u = 9
pub const X25519_BASEPOINT_BYTES: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

/// Encoding of the X448 base point, u = 5
pub const X448_BASEPOINT_BYTES: [u8; 56] = {
    let mut b = [0u8; 56];
    b[0] = 5;
    b
};

/// The X25519 function of RFC 7748 §5
///
/// Clamps `k`, masks `u` and returns the encoded u-coordinate of `k * u`.
/// The result may be all zero.
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    X25519Engine::x25519().scalar_mult_bytes(&k, &u)
}

/// The X448 function of RFC 7748 §5
pub fn x448(k: [u8; 56], u: [u8; 56]) -> [u8; 56] {
    X448Engine::x448().scalar_mult_bytes(&k, &u)
}

/// X25519 key agreement with the default low-order policy
#[derive(Clone, Copy, Debug, Default)]
pub struct X25519;

/// X448 key agreement with the default low-order policy
#[derive(Clone, Copy, Debug, Default)]
pub struct X448;

macro_rules! impl_key_agreement {
    ($scheme:ident, $engine:expr, $n:expr) => {
        impl KeyAgreement for $scheme {
            type PublicKey = PublicKey<$n>;
            type SecretKey = StaticSecret<$n>;
            type SharedSecret = SharedSecret<$n>;
            type KeyPair = KeyPair<$n>;

            fn name() -> &'static str {
                $engine.name()
            }

            fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
                Ok(KeyPair::generate(&$engine, rng))
            }

            fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
                *keypair.public()
            }

            fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
                keypair.secret().clone()
            }

            fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey> {
                Ok(secret_key.public_key(&$engine))
            }

            fn agree(
                secret_key: &Self::SecretKey,
                peer_public_key: &Self::PublicKey,
            ) -> Result<Self::SharedSecret> {
                secret_key.diffie_hellman(&$engine, peer_public_key)
            }
        }
    };
}

impl_key_agreement!(X25519, X25519Engine::x25519(), 32);
impl_key_agreement!(X448, X448Engine::x448(), 56);
