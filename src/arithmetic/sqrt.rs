//! square root implementation

use crate::*;
use super::{make_rounded, newton};


/// Highest precision solved directly; above this the root is found
/// through the reciprocal square root, which needs no division
const DIRECT_MAX_PRECISION: u64 = 128;

/// Extra precision carried through the iteration; the estimate is then
/// within a small fraction of an ulp of the root
const GUARD_BITS: u64 = 32;


/// Method used to compute a square root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SqrtStrategy {
    /// Newton on `t² − m`, one division per step
    Direct,
    /// Newton on `1/t² − m`, then multiply by `m`
    Inverse,
}

impl SqrtStrategy {
    pub(crate) fn for_precision(prec: NonZeroU64) -> Self {
        if prec.get() <= DIRECT_MAX_PRECISION {
            SqrtStrategy::Direct
        } else {
            SqrtStrategy::Inverse
        }
    }
}


/// Square root of `z`, rounded to the precision of `ctx`
pub(crate) fn impl_sqrt(z: &BigFloat, ctx: &Context) -> Result<BigFloat, ArithmeticError> {
    match (z.form, z.neg) {
        (Form::Zero, neg) => return Ok(BigFloat::new_zero(neg, ctx)),
        (_, true) => return Err(ArithmeticError::Domain),
        (Form::Infinite, false) => return Ok(BigFloat::new_infinite(false, ctx)),
        (Form::Finite, false) => {}
    }

    // z = mant × 2^exp with mant in [0.5, 1); fold an odd exponent into the
    // mantissa so exp/2 (truncated) is exact
    let (mant, exp) = z.mant_exp();
    let mant = match exp % 2 {
        0 => mant,
        1 => mant.double(),
        _ => mant.half(),
    };

    let target = ctx.precision().saturating_add(GUARD_BITS);
    let estimate = match SqrtStrategy::for_precision(ctx.precision()) {
        SqrtStrategy::Direct => sqrt_direct(&mant, target)?,
        SqrtStrategy::Inverse => sqrt_inverse(&mant, target)?,
    };
    let root = round_root(&mant, &estimate, ctx);

    Ok(BigFloat::from_mant_exp(&root, exp / 2))
}

/// √m for `0.25 ≤ m < 2` to `target` bits, by Newton's method on `t² − m`
fn sqrt_direct(m: &BigFloat, target: NonZeroU64) -> Result<BigFloat, ArithmeticError> {
    let guess = BigFloat::try_from(native_sqrt(m.to_native()))?;
    Ok(newton::newton(square_residual, half_reciprocal, m, &guess, target))
}

/// √m for `0.25 ≤ m < 2` to `target` bits, as `m × (1/√m)`
fn sqrt_inverse(m: &BigFloat, target: NonZeroU64) -> Result<BigFloat, ArithmeticError> {
    let guess = BigFloat::try_from(1.0 / native_sqrt(m.to_native()))?;
    let inverse_root = newton::newton_quotient(inverse_root_quotient, m, &guess, target);

    Ok(m.mul_with_context(&inverse_root, &Context::new(target, RoundingMode::HalfEven)))
}

/// Round `estimate`, a close approximation of √m, to the context
///
/// The estimate is rounded to nearest on a grid one bit finer than the
/// context, which holds every rounding boundary of the context. Squaring
/// that grid point exactly tells on which side of it the root lies, so
/// the final rounding is correct in every mode, ties included.
fn round_root(m: &BigFloat, estimate: &BigFloat, ctx: &Context) -> BigFloat {
    let grid = ctx.precision().saturating_add(1);
    let s = estimate.with_context(&Context::new(grid, RoundingMode::HalfEven));
    let exact = Context::new(grid.saturating_add(grid.get()), RoundingMode::HalfEven);

    // s written two bits finer than ctx: no boundary of ctx lies strictly
    // between s and either neighbour on that grid
    let width = ctx.precision().get().saturating_add(2);
    let mant = &s.mant << (width - s.mant.bits());
    let lsb = s.exp as i128 - width as i128;

    match m.cmp(&s.square_with_context(&exact)) {
        Ordering::Equal => make_rounded(false, s.mant.clone(), s.lsb_exp(), false, ctx),
        Ordering::Greater => make_rounded(false, mant, lsb, true, ctx),
        Ordering::Less => make_rounded(false, mant - 1u8, lsb, true, ctx),
    }
}

/// t² − z
fn square_residual(t: &BigFloat, z: &BigFloat, ctx: &Context) -> BigFloat {
    t.square_with_context(ctx).sub_with_context(z, ctx)
}

/// 1 / 2t
fn half_reciprocal(t: &BigFloat, _z: &BigFloat, ctx: &Context) -> BigFloat {
    BigFloat::one().div_with_context(&t.double(), ctx)
}

/// (1/t² − z) / (−2/t³) = −½·t·(1 − z·t²)
fn inverse_root_quotient(t: &BigFloat, z: &BigFloat, ctx: &Context) -> BigFloat {
    let u = t.square_with_context(ctx);
    let u = u.mul_with_context(z, ctx);
    let u = BigFloat::one().sub_with_context(&u, ctx);
    let u = -u.half();
    t.mul_with_context(&u, ctx)
}
