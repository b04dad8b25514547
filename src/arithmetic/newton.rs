//! Newton's method with precision doubling
//!
//! Starting from an estimate good to the precision of an `f64`, each
//! Newton step roughly doubles the number of correct bits, so each step is
//! evaluated at twice the precision of the one before, capped at the target.

use crate::*;


/// Precision of an initial estimate computed with native `f64` arithmetic
pub(crate) const NATIVE_PRECISION: NonZeroU64 = match NonZeroU64::new(53) {
    Some(prec) => prec,
    None => panic!("native precision is nonzero"),
};

const TWO: NonZeroU64 = match NonZeroU64::new(2) {
    Some(n) => n,
    None => panic!("two is nonzero"),
};

/// Part of a Newton update: a function of the current estimate `t` and the
/// fixed argument `z`, rounded to the working context
pub(crate) type Term = fn(t: &BigFloat, z: &BigFloat, ctx: &Context) -> BigFloat;


/// Solve `f(t) = 0` with the update `t − f(t) · (1/f′)(t)`
///
/// Iterates from `guess` until a step has been computed at precision
/// `target`. Like [`newton_quotient`], the square root passes its own
/// precision plus guard bits here and rounds the estimate afterwards.
pub(crate) fn newton(
    f: Term,
    df_inverse: Term,
    z: &BigFloat,
    guess: &BigFloat,
    target: NonZeroU64,
) -> BigFloat {
    iterate(guess, target, |t, ctx| {
        let correction = f(t, z, ctx).mul_with_context(&df_inverse(t, z, ctx), ctx);
        t.sub_with_context(&correction, ctx)
    })
}

/// Solve `f(t) = 0` with the update `t − (f/f′)(t)`
///
/// Used when the quotient simplifies to something cheaper than a
/// division. `target` is the precision of the final step, which may
/// include guard bits the caller later rounds away.
pub(crate) fn newton_quotient(
    f_over_df: Term,
    z: &BigFloat,
    guess: &BigFloat,
    target: NonZeroU64,
) -> BigFloat {
    iterate(guess, target, |t, ctx| t.sub_with_context(&f_over_df(t, z, ctx), ctx))
}

/// Apply `step` with doubling precision until a step at `target` is done
///
/// At least one step is taken, so targets below the native precision
/// still round through the update.
fn iterate<F>(guess: &BigFloat, target: NonZeroU64, mut step: F) -> BigFloat
where
    F: FnMut(&BigFloat, &Context) -> BigFloat,
{
    let mut current = NATIVE_PRECISION;
    let mut estimate = guess.clone();

    loop {
        let next = cmp::min(current.saturating_mul(TWO), target);
        let ctx = Context::new(next, RoundingMode::HalfEven);
        estimate = step(&estimate, &ctx);

        if next == target {
            return estimate;
        }
        current = next;
    }
}
