//! x-only Montgomery ladder
//!
//! One ladder serves every curve: the curve table supplies the field, the
//! ladder constant and the number of iterations. Per iteration the ladder
//! performs one masked swap and one combined differential addition and
//! doubling, whatever the scalar bit. The final conversion to affine form
//! uses the fixed-exponent inversion, so `0` maps to `0`.

use subtle::{Choice, ConditionallySelectable};

use crate::codec::Scalar;
use crate::curve::CurveParameters;
use crate::field::FieldElement;

/// A point in projective (X : Z) form, u = X / Z
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<const LIMBS: usize> {
    /// Projective X
    pub x: FieldElement<LIMBS>,
    /// Projective Z
    pub z: FieldElement<LIMBS>,
}

impl<const LIMBS: usize> ProjectivePoint<LIMBS> {
    /// The point at infinity, (1 : 0)
    pub fn identity(like: &FieldElement<LIMBS>) -> Self {
        let field = like.field();
        Self {
            x: field.one(),
            z: field.zero(),
        }
    }

    /// The affine u-coordinate as (u : 1)
    pub fn from_u(u: &FieldElement<LIMBS>) -> Self {
        Self {
            x: *u,
            z: u.field().one(),
        }
    }

    /// X * Z^-1, which is zero for the point at infinity
    pub fn to_affine(&self) -> FieldElement<LIMBS> {
        self.x * self.z.invert()
    }

    /// Swap `a` and `b` when `choice` is set
    #[inline]
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        FieldElement::conditional_swap(&mut a.x, &mut b.x, choice);
        FieldElement::conditional_swap(&mut a.z, &mut b.z, choice);
    }
}

/// One ladder step: `p2 <- 2 * p2`, `p3 <- p2 + p3`
///
/// `u` is the affine difference `p3 - p2`. Costs 4 additions,
/// 4 subtractions, 4 squarings and 6 multiplications.
#[inline]
pub fn ladder_step<const LIMBS: usize>(
    p2: &mut ProjectivePoint<LIMBS>,
    p3: &mut ProjectivePoint<LIMBS>,
    u: &FieldElement<LIMBS>,
    a24: &FieldElement<LIMBS>,
) {
    let a = p2.x + p2.z;
    let aa = a.square();
    let b = p2.x - p2.z;
    let bb = b.square();
    let e = aa - bb;
    let c = p3.x + p3.z;
    let d = p3.x - p3.z;
    let da = d * a;
    let cb = c * b;

    p3.x = (da + cb).square();
    p3.z = *u * (da - cb).square();
    p2.x = aa * bb;
    p2.z = e * (aa + *a24 * e);
}

/// Multiply the point with u-coordinate `u` by a clamped scalar
///
/// Walks bits `ladder_bits - 1` down to `0` of the scalar. The swap state is
/// carried between iterations so each iteration issues exactly one swap,
/// and one last swap restores the order after the loop.
pub fn scalar_mult<const LIMBS: usize, const N: usize>(
    curve: &'static CurveParameters<LIMBS, N>,
    u: &FieldElement<LIMBS>,
    scalar: &Scalar<N>,
) -> FieldElement<LIMBS> {
    let a24 = curve.a24();
    let mut p2 = ProjectivePoint::identity(u);
    let mut p3 = ProjectivePoint::from_u(u);
    let mut swap = Choice::from(0);

    for t in (0..curve.ladder_bits).rev() {
        let bit = scalar.bit(t);
        swap ^= bit;
        ProjectivePoint::conditional_swap(&mut p2, &mut p3, swap);
        swap = bit;

        ladder_step(&mut p2, &mut p3, u, &a24);
    }
    ProjectivePoint::conditional_swap(&mut p2, &mut p3, swap);

    p2.to_affine()
}
