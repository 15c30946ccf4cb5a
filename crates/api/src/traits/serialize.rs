//! Byte encodings of key material
//!
//! Every key and secret of a Montgomery curve is a fixed-length
//! little-endian string (32 bytes for X25519, 56 for X448), so decoding only
//! has to check the length.

use crate::Result;
use zeroize::Zeroizing;

/// Encoding of public values such as public keys
pub trait Serialize: Sized {
    /// Decode from exactly the curve's key length
    ///
    /// Fails with `InvalidEncodingLength` on any other length; the bytes are
    /// never padded or truncated.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// The encoded bytes
    fn to_bytes(&self) -> Vec<u8>;
}

/// Encoding of secret values such as private keys and shared secrets
pub trait SerializeSecret: Sized {
    /// Decode from exactly the curve's key length
    ///
    /// The value is copied into memory that is wiped on drop; the caller
    /// remains responsible for wiping `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// The encoded bytes, wiped when the returned buffer is dropped
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
