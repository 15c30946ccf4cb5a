//! Trait definition for Diffie-Hellman style key agreement
//!
//! Unlike a KEM, both parties contribute a long-lived or ephemeral key pair
//! and derive the same raw shared secret from their own secret key and the
//! peer's public key. No key derivation is applied to the result.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a key-agreement scheme with domain-specific key types.
///
/// # Security Design
///
/// Secret keys and shared secrets are `Zeroize` so callers can erase them;
/// the concrete types in this library also wipe themselves on drop.
pub trait KeyAgreement {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Raw shared secret produced by the agreement.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type holding a secret key and its public key.
    type KeyPair: Clone;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// All randomness comes from the provided CSPRNG; the scheme never
    /// generates entropy on its own.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Derive the public key belonging to `secret_key`.
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Combine our secret key with the peer's public key.
    ///
    /// # Security Requirements
    /// - Must be constant-time in the secret key.
    /// - Does not reject low-order peer keys unless the implementation
    ///   documents a policy that does.
    fn agree(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
