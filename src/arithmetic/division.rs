//! Division of BigFloats

use crate::*;
use super::make_rounded;


/// Divide `x` by `y`, rounding to context
pub(crate) fn impl_div(x: &BigFloat, y: &BigFloat, ctx: &Context) -> BigFloat {
    let neg = x.neg ^ y.neg;

    match (x.form, y.form) {
        (Form::Zero, Form::Zero) => panic!("Division of zero by zero is not a number"),
        (Form::Infinite, Form::Infinite) => panic!("Division of infinity by infinity is not a number"),
        (Form::Zero, _) | (_, Form::Infinite) => BigFloat::new_zero(neg, ctx),
        (Form::Infinite, _) | (_, Form::Zero) => BigFloat::new_infinite(neg, ctx),
        (Form::Finite, Form::Finite) => divide_finite(neg, x, y, ctx),
    }
}

fn divide_finite(neg: bool, x: &BigFloat, y: &BigFloat, ctx: &Context) -> BigFloat {
    let prec = ctx.precision().get();

    // widen the dividend until the quotient has prec+3 bits,
    // the remainder then only marks the result inexact
    let shift = (prec + 3 + y.mant.bits()).saturating_sub(x.mant.bits());
    let num = &x.mant << shift;
    let (quotient, remainder) = num.div_rem(&y.mant);

    let lsb = x.lsb_exp() - shift as i128 - y.lsb_exp();
    make_rounded(neg, quotient, lsb, !remainder.is_zero(), ctx)
}
