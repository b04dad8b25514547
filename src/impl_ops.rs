//! Implement math operations: Add,Sub, etc
//!
//! The result of an operator is rounded to the wider precision of the two
//! operands, using the rounding mode of the left hand side. Use the
//! `*_with_context` methods to choose the precision explicitly.

use crate::*;


impl_binop_with_context!(impl Add::add => add_with_context);
impl_binop_with_context!(impl Sub::sub => sub_with_context);
impl_binop_with_context!(impl Mul::mul => mul_with_context);
impl_binop_with_context!(impl Div::div => div_with_context);


impl Neg for BigFloat {
    type Output = BigFloat;

    #[inline]
    fn neg(mut self) -> BigFloat {
        self.neg = !self.neg;
        self
    }
}

impl<'a> Neg for &'a BigFloat {
    type Output = BigFloat;

    #[inline]
    fn neg(self) -> BigFloat {
        -self.clone()
    }
}
