//! Prime-field arithmetic in Montgomery form
//!
//! [`PrimeField`] holds a modulus together with its Montgomery constants,
//! all derived at compile time. [`FieldElement`] is a value of such a field
//! stored as `x * R mod p` with `R = 2^(64 * LIMBS)`.
//!
//! Addition, subtraction, multiplication, squaring and inversion run in
//! time that depends only on `LIMBS`. Results are always fully reduced.

use core::fmt;
use core::ops::{Add, Mul, Sub};

use montdh_internal::constant_time::{ct_select_limbs, ct_swap_limbs};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

mod arith;

#[cfg(any(test, feature = "op-trace"))]
pub mod trace;

#[cfg(any(test, feature = "op-trace"))]
macro_rules! count_op {
    ($op:ident) => {
        trace::record(|counts| counts.$op += 1)
    };
}

#[cfg(not(any(test, feature = "op-trace")))]
macro_rules! count_op {
    ($op:ident) => {};
}

/// An odd prime modulus with its Montgomery constants
#[derive(Clone, PartialEq, Eq)]
pub struct PrimeField<const LIMBS: usize> {
    /// p, little-endian limbs
    modulus: [u64; LIMBS],
    /// -(p^-1) mod 2^64
    inv: u64,
    /// R mod p
    r: [u64; LIMBS],
    /// R^2 mod p
    r2: [u64; LIMBS],
    /// p - 2, the inversion exponent
    p_minus_2: [u64; LIMBS],
}

impl<const LIMBS: usize> PrimeField<LIMBS> {
    /// Derive the Montgomery constants of `modulus`
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a constant) if the modulus is
    /// even or smaller than 3.
    pub const fn new(modulus: [u64; LIMBS]) -> Self {
        assert!(LIMBS > 0, "field needs at least one limb");
        assert!(modulus[0] & 1 == 1, "Montgomery form needs an odd modulus");
        let mut above_two = modulus[0] > 2;
        let mut i = 1;
        while i < LIMBS {
            above_two |= modulus[i] != 0;
            i += 1;
        }
        assert!(above_two, "modulus must exceed 2");

        Self {
            modulus,
            inv: arith::montgomery_inv(modulus[0]),
            r: arith::power_of_two_mod(64 * LIMBS, &modulus),
            r2: arith::power_of_two_mod(128 * LIMBS, &modulus),
            p_minus_2: arith::sub_small(&modulus, 2),
        }
    }

    /// The modulus as little-endian limbs
    pub const fn modulus(&self) -> &[u64; LIMBS] {
        &self.modulus
    }

    /// The additive identity
    pub fn zero(&'static self) -> FieldElement<LIMBS> {
        FieldElement {
            limbs: [0u64; LIMBS],
            field: self,
        }
    }

    /// The multiplicative identity
    pub fn one(&'static self) -> FieldElement<LIMBS> {
        FieldElement {
            limbs: self.r,
            field: self,
        }
    }

    /// Embed a small integer
    pub fn from_u64(&'static self, value: u64) -> FieldElement<LIMBS> {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        self.from_limbs(&limbs)
    }

    /// Embed any integer below 2^(64 * LIMBS), reducing it modulo p
    ///
    /// Non-canonical inputs in `[p, 2^(64 * LIMBS))` are accepted and reduced.
    pub fn from_limbs(&'static self, limbs: &[u64; LIMBS]) -> FieldElement<LIMBS> {
        FieldElement {
            limbs: arith::montgomery_mul(limbs, &self.r2, &self.modulus, self.inv),
            field: self,
        }
    }

    #[inline(always)]
    fn mont_mul(&self, a: &[u64; LIMBS], b: &[u64; LIMBS]) -> [u64; LIMBS] {
        arith::montgomery_mul(a, b, &self.modulus, self.inv)
    }
}

impl<const LIMBS: usize> fmt::Debug for PrimeField<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeField(0x")?;
        for limb in self.modulus.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}

/// An element of a [`PrimeField`], kept in Montgomery form
///
/// Elements carry a reference to their field; mixing elements of two
/// different fields is a logic error and is caught by a debug assertion.
#[derive(Clone, Copy)]
pub struct FieldElement<const LIMBS: usize> {
    limbs: [u64; LIMBS],
    field: &'static PrimeField<LIMBS>,
}

impl<const LIMBS: usize> FieldElement<LIMBS> {
    /// The field this element belongs to
    pub fn field(&self) -> &'static PrimeField<LIMBS> {
        self.field
    }

    #[inline(always)]
    fn with_limbs(&self, limbs: [u64; LIMBS]) -> Self {
        Self {
            limbs,
            field: self.field,
        }
    }

    #[inline(always)]
    fn check_same_field(&self, rhs: &Self) {
        debug_assert!(
            core::ptr::eq(self.field, rhs.field) || self.field == rhs.field,
            "operands belong to different fields"
        );
    }

    /// Return `self + rhs`
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        self.check_same_field(rhs);
        count_op!(additions);
        self.with_limbs(arith::add_mod(&self.limbs, &rhs.limbs, &self.field.modulus))
    }

    /// Return `self - rhs`
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.check_same_field(rhs);
        count_op!(subtractions);
        self.with_limbs(arith::sub_mod(&self.limbs, &rhs.limbs, &self.field.modulus))
    }

    /// Return `self * rhs`
    #[inline]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.check_same_field(rhs);
        count_op!(multiplications);
        self.with_limbs(self.field.mont_mul(&self.limbs, &rhs.limbs))
    }

    /// Return `self^2`
    #[inline]
    pub fn square(&self) -> Self {
        count_op!(squarings);
        self.with_limbs(self.field.mont_mul(&self.limbs, &self.limbs))
    }

    /// Return `self^(p-2)`, which is `self^-1` for non-zero `self` and zero for zero
    ///
    /// Left-to-right square-and-multiply over every bit of `p - 2`,
    /// including leading zeros. Each bit costs one squaring, one
    /// multiplication and one masked select, whatever its value.
    pub fn invert(&self) -> Self {
        let mut acc = self.field.one();
        for limb in self.field.p_minus_2.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();
                let product = FieldElement::mul(&acc, self);
                acc = Self::conditional_select(&acc, &product, Choice::from(((limb >> bit) & 1) as u8));
            }
        }
        acc
    }

    /// Constant-time zero check
    pub fn is_zero(&self) -> Choice {
        self.limbs[..].ct_eq(&[0u64; LIMBS][..])
    }

    /// The fully reduced integer value, little-endian limbs
    pub fn to_canonical_limbs(&self) -> [u64; LIMBS] {
        let mut one = [0u64; LIMBS];
        one[0] = 1;
        let value = self.field.mont_mul(&self.limbs, &one);
        // mont_mul output is below p already; a zero input maps to zero
        arith::subtract_modulus(&value, 0, &self.field.modulus)
    }
}

impl<const LIMBS: usize> Add for FieldElement<LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(&self, &rhs)
    }
}

impl<const LIMBS: usize> Sub for FieldElement<LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        FieldElement::sub(&self, &rhs)
    }
}

impl<const LIMBS: usize> Mul for FieldElement<LIMBS> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement::mul(&self, &rhs)
    }
}

impl<const LIMBS: usize> ConstantTimeEq for FieldElement<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Montgomery form is a bijection on [0, p), so limbs compare directly
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl<const LIMBS: usize> PartialEq for FieldElement<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<const LIMBS: usize> Eq for FieldElement<LIMBS> {}

impl<const LIMBS: usize> ConditionallySelectable for FieldElement<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        count_op!(selections);
        a.with_limbs(ct_select_limbs(&a.limbs, &b.limbs, choice))
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        count_op!(swaps);
        ct_swap_limbs(&mut a.limbs, &mut b.limbs, choice);
    }
}

impl<const LIMBS: usize> fmt::Debug for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for limb in self.to_canonical_limbs().iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}
