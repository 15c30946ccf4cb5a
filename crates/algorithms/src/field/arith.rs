//! Multi-precision helpers over little-endian 64-bit limbs
//!
//! Everything here is `const fn` so the Montgomery constants of a field can
//! be derived from its modulus at compile time.

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The returned borrow is all-ones when the subtraction wrapped.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Reduce `hi * 2^(64L) + t` by one subtraction of `p`
///
/// Requires `hi * 2^(64L) + t < 2p`. The difference is always computed and
/// the borrow mask picks between it and the input.
#[inline(always)]
pub(crate) const fn subtract_modulus<const L: usize>(
    t: &[u64; L],
    hi: u64,
    p: &[u64; L],
) -> [u64; L] {
    let mut diff = [0u64; L];
    let mut borrow = 0u64;
    let mut i = 0;
    while i < L {
        let (d, b) = sbb(t[i], p[i], borrow);
        diff[i] = d;
        borrow = b;
        i += 1;
    }
    let (_, borrow) = sbb(hi, 0, borrow);

    let mut out = [0u64; L];
    let mut i = 0;
    while i < L {
        out[i] = (t[i] & borrow) | (diff[i] & !borrow);
        i += 1;
    }
    out
}

/// (a + b) mod p for a, b < p
#[inline(always)]
pub(crate) const fn add_mod<const L: usize>(a: &[u64; L], b: &[u64; L], p: &[u64; L]) -> [u64; L] {
    let mut sum = [0u64; L];
    let mut carry = 0u64;
    let mut i = 0;
    while i < L {
        let (s, c) = adc(a[i], b[i], carry);
        sum[i] = s;
        carry = c;
        i += 1;
    }
    subtract_modulus(&sum, carry, p)
}

/// (a - b) mod p for a, b < p
#[inline(always)]
pub(crate) const fn sub_mod<const L: usize>(a: &[u64; L], b: &[u64; L], p: &[u64; L]) -> [u64; L] {
    let mut diff = [0u64; L];
    let mut borrow = 0u64;
    let mut i = 0;
    while i < L {
        let (d, b) = sbb(a[i], b[i], borrow);
        diff[i] = d;
        borrow = b;
        i += 1;
    }

    // add p back under the borrow mask
    let mut carry = 0u64;
    let mut i = 0;
    while i < L {
        let (s, c) = adc(diff[i], p[i] & borrow, carry);
        diff[i] = s;
        carry = c;
        i += 1;
    }
    diff
}

/// Montgomery product a * b * R^-1 mod p (CIOS)
///
/// Inputs may be any values below 2^(64L); the output is below p whenever
/// one input is below p.
#[inline(always)]
pub(crate) const fn montgomery_mul<const L: usize>(
    a: &[u64; L],
    b: &[u64; L],
    p: &[u64; L],
    inv: u64,
) -> [u64; L] {
    let mut t = [0u64; L];
    let mut t_hi = 0u64;

    let mut i = 0;
    while i < L {
        // t += a * b[i]
        let mut carry = 0u64;
        let mut j = 0;
        while j < L {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (v, hi2) = adc(t_hi, carry, 0);
        t_hi = v;

        // t = (t + m * p) / 2^64
        let m = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], m, p[0], 0);
        let mut j = 1;
        while j < L {
            let (v, c) = mac(t[j], m, p[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t_hi, carry, 0);
        t[L - 1] = v;
        t_hi = hi2 + c;

        i += 1;
    }

    subtract_modulus(&t, t_hi, p)
}

/// -(p0^-1) mod 2^64 for odd p0
pub(crate) const fn montgomery_inv(p0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(p0);
        i += 1;
    }
    inv.wrapping_neg()
}

/// 2^exponent mod p by repeated modular doubling of one
pub(crate) const fn power_of_two_mod<const L: usize>(exponent: usize, p: &[u64; L]) -> [u64; L] {
    let mut acc = [0u64; L];
    acc[0] = 1;
    let mut i = 0;
    while i < exponent {
        acc = add_mod(&acc, &acc, p);
        i += 1;
    }
    acc
}

/// a - small for a >= small
pub(crate) const fn sub_small<const L: usize>(a: &[u64; L], small: u64) -> [u64; L] {
    let mut out = [0u64; L];
    let mut borrow = 0u64;
    let mut i = 0;
    while i < L {
        let rhs = if i == 0 { small } else { 0 };
        let (d, b) = sbb(a[i], rhs, borrow);
        out[i] = d;
        borrow = b;
        i += 1;
    }
    out
}
