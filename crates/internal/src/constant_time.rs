//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different length compare unequal; the length itself is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time check that every byte of `bytes` is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}

/// All-ones mask when `choice` is set, all-zeros otherwise
#[inline(always)]
pub fn ct_mask_u64(choice: Choice) -> u64 {
    0u64.wrapping_sub(choice.unwrap_u8() as u64)
}

/// Select `b` when `choice` is set, `a` otherwise, limb by limb
#[inline]
pub fn ct_select_limbs<const L: usize>(a: &[u64; L], b: &[u64; L], choice: Choice) -> [u64; L] {
    let mut out = [0u64; L];
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u64::conditional_select(x, y, choice);
    }
    out
}

/// Swap `a` and `b` when `choice` is set
///
/// Both arrays are rewritten on every call: the swap is an XOR with
/// `mask & (a ^ b)`, where the mask is all-ones or all-zeros.
#[inline]
pub fn ct_swap_limbs<const L: usize>(a: &mut [u64; L], b: &mut [u64; L], choice: Choice) {
    let mask = ct_mask_u64(choice);
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let t = mask & (*x ^ *y);
        *x ^= t;
        *y ^= t;
    }
}
