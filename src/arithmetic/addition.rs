//!
//! Addition and subtraction of BigFloats
//!

use crate::*;
use super::make_rounded;


/// Add (or subtract, if `negate_rhs`) two BigFloats, rounding to context
pub(crate) fn impl_add(x: &BigFloat, y: &BigFloat, negate_rhs: bool, ctx: &Context) -> BigFloat {
    let y_neg = y.neg ^ negate_rhs;

    match (x.form, y.form) {
        (Form::Infinite, Form::Infinite) => {
            if x.neg != y_neg {
                panic!("Sum of infinities with opposite signs is not a number");
            }
            BigFloat::new_infinite(x.neg, ctx)
        }
        (Form::Infinite, _) => BigFloat::new_infinite(x.neg, ctx),
        (_, Form::Infinite) => BigFloat::new_infinite(y_neg, ctx),
        (Form::Zero, Form::Zero) => {
            BigFloat::new_zero(zero_sum_sign(x.neg, y_neg, ctx), ctx)
        }
        (Form::Zero, Form::Finite) => {
            make_rounded(y_neg, y.mant.clone(), y.lsb_exp(), false, ctx)
        }
        (Form::Finite, Form::Zero) => {
            make_rounded(x.neg, x.mant.clone(), x.lsb_exp(), false, ctx)
        }
        (Form::Finite, Form::Finite) => {
            if x.exp >= y.exp {
                add_finite((x, x.neg), (y, y_neg), ctx)
            } else {
                add_finite((y, y_neg), (x, x.neg), ctx)
            }
        }
    }
}

/// Sign of a zero sum: kept if both terms agree, otherwise negative only
/// when rounding towards -∞
#[inline]
fn zero_sum_sign(x_neg: bool, y_neg: bool, ctx: &Context) -> bool {
    if x_neg == y_neg {
        x_neg
    } else {
        ctx.rounding_mode() == RoundingMode::Floor
    }
}

/// Sum of finite nonzero terms, `a` having the larger exponent
fn add_finite(a: (&BigFloat, bool), b: (&BigFloat, bool), ctx: &Context) -> BigFloat {
    let (a, a_neg) = a;
    let (b, b_neg) = b;

    // a is at least 2^(a.exp-1) and exact to 2^(a.exp-p); anything below
    // 2^(a.exp-p-3) only decides the direction of rounding
    let p = cmp::max(ctx.precision().get(), a.mant.bits()) as i128;
    let cutoff = a.exp as i128 - p - 3;

    if b.exp as i128 <= cutoff {
        let stand_in = BigUint::one();
        return add_aligned((a_neg, &a.mant, a.lsb_exp()), (b_neg, &stand_in, cutoff - 1), ctx);
    }

    add_aligned((a_neg, &a.mant, a.lsb_exp()), (b_neg, &b.mant, b.lsb_exp()), ctx)
}

/// Exact sum of two signed integers `mant × 2^lsb`, rounded once
fn add_aligned(a: (bool, &BigUint, i128), b: (bool, &BigUint, i128), ctx: &Context) -> BigFloat {
    let (a_neg, a_mant, a_lsb) = a;
    let (b_neg, b_mant, b_lsb) = b;

    let lsb = cmp::min(a_lsb, b_lsb);
    let a_mant = a_mant << (a_lsb - lsb) as u64;
    let b_mant = b_mant << (b_lsb - lsb) as u64;

    if a_neg == b_neg {
        return make_rounded(a_neg, a_mant + b_mant, lsb, false, ctx);
    }

    match a_mant.cmp(&b_mant) {
        Ordering::Greater => make_rounded(a_neg, a_mant - b_mant, lsb, false, ctx),
        Ordering::Less => make_rounded(b_neg, b_mant - a_mant, lsb, false, ctx),
        Ordering::Equal => BigFloat::new_zero(ctx.rounding_mode() == RoundingMode::Floor, ctx),
    }
}
