//! Clamped ladder scalars

use core::fmt;

use montdh_common::SecretBuffer;
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::clamp;
use crate::curve::CurveParameters;

/// A clamped private scalar, wiped on drop
///
/// Only ever built through clamping, so bit `scalar_top_bit` is set and the
/// low cofactor bits are clear.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar<const N: usize>(SecretBuffer<N>);

impl<const N: usize> Scalar<N> {
    /// Copy and clamp a private key
    pub fn from_bytes_clamped<const LIMBS: usize>(
        curve: &CurveParameters<LIMBS, N>,
        bytes: &[u8; N],
    ) -> Self {
        let mut buf = SecretBuffer::new(*bytes);
        clamp(curve, buf.as_mut_array());
        Self(buf)
    }

    /// Copy and clamp a private key from a slice of exactly `N` bytes
    pub(crate) fn from_slice_clamped<const LIMBS: usize>(
        curve: &CurveParameters<LIMBS, N>,
        bytes: &[u8],
    ) -> Self {
        let mut buf = SecretBuffer::zeroed();
        buf.as_mut_array().copy_from_slice(bytes);
        clamp(curve, buf.as_mut_array());
        Self(buf)
    }

    /// The clamped scalar bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        self.0.as_array()
    }

    /// Bit `t` of the scalar, counting from the least significant bit
    #[inline(always)]
    pub fn bit(&self, t: usize) -> Choice {
        Choice::from((self.0.as_array()[t >> 3] >> (t & 7)) & 1)
    }
}

impl<const N: usize> fmt::Debug for Scalar<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>([REDACTED])", N)
    }
}
