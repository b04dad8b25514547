//! Multiplication of BigFloats

use crate::*;
use super::make_rounded;


/// Multiply two BigFloats, rounding to context
pub(crate) fn impl_mul(x: &BigFloat, y: &BigFloat, ctx: &Context) -> BigFloat {
    let neg = x.neg ^ y.neg;

    match (x.form, y.form) {
        (Form::Zero, Form::Infinite) | (Form::Infinite, Form::Zero) => {
            panic!("Product of zero and infinity is not a number");
        }
        (Form::Infinite, _) | (_, Form::Infinite) => BigFloat::new_infinite(neg, ctx),
        (Form::Zero, _) | (_, Form::Zero) => BigFloat::new_zero(neg, ctx),
        (Form::Finite, Form::Finite) => {
            let lsb = x.lsb_exp() + y.lsb_exp();
            make_rounded(neg, &x.mant * &y.mant, lsb, false, ctx)
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $x:literal * $y:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let x = BigFloat::try_from($x as f64).unwrap();
                    let y = BigFloat::try_from($y as f64).unwrap();
                    let expected = BigFloat::try_from($expected as f64).unwrap();

                    let ctx = Context::default();
                    assert_eq!(impl_mul(&x, &y, &ctx), expected);
                    assert_eq!(impl_mul(&y, &x, &ctx), expected);
                }
            }
        };
    }

    impl_case!(small_ints: 6 * 7 => 42);
    impl_case!(fractions: 0.375 * 1.25 => 0.46875);
    impl_case!(negative: -2.5 * 4 => -10);
    impl_case!(both_negative: -0.5 * -0.5 => 0.25);
    impl_case!(power_of_two: 1024 * 0.0009765625 => 1);

    #[test]
    fn rounds_product() {
        let ctx = Context::default().with_prec(4).unwrap();

        // 13 × 11 = 143 = 10001111₂ -> 1001|0000
        let product = impl_mul(&BigFloat::from(13), &BigFloat::from(11), &ctx);
        assert_eq!(product, BigFloat::from(144));
        assert_eq!(product.precision(), 4);

        let ctx = ctx.with_rounding_mode(RoundingMode::Down);
        let product = impl_mul(&BigFloat::from(13), &BigFloat::from(11), &ctx);
        assert_eq!(product, BigFloat::from(128));
    }

    #[test]
    fn zero_sign_is_product_of_signs() {
        let ctx = Context::default();
        let product = impl_mul(&BigFloat::zero(), &BigFloat::from(-3), &ctx);
        assert!(product.is_zero());
        assert!(product.is_sign_negative());

        let product = impl_mul(&BigFloat::zero_with_sign(Sign::Minus), &BigFloat::from(-3), &ctx);
        assert!(product.is_sign_positive());
    }

    #[test]
    fn infinite_product() {
        let ctx = Context::default();
        let product = impl_mul(&BigFloat::infinity(Sign::Plus), &BigFloat::from(-3), &ctx);
        assert_eq!(product, BigFloat::infinity(Sign::Minus));
    }

    #[test]
    fn exponent_overflow_saturates() {
        let ctx = Context::default();
        let huge = BigFloat::from_mant_exp(&BigFloat::one(), i64::MAX - 11);
        let tiny = BigFloat::from_mant_exp(&BigFloat::one(), i64::MIN + 11);

        assert_eq!(impl_mul(&huge, &huge, &ctx), BigFloat::infinity(Sign::Plus));
        assert_eq!(impl_mul(&-&huge, &huge, &ctx), BigFloat::infinity(Sign::Minus));

        let product = impl_mul(&-&tiny, &tiny, &ctx);
        assert!(product.is_zero());
        assert!(product.is_sign_negative());

        // huge × tiny is near one, and exact
        assert_eq!(impl_mul(&huge, &tiny, &ctx), BigFloat::one().half());
    }

    #[test]
    #[should_panic(expected = "not a number")]
    fn zero_times_infinity() {
        impl_mul(&BigFloat::zero(), &BigFloat::infinity(Sign::Minus), &Context::default());
    }
}
