//! arithmetic routines

use crate::*;

pub(crate) mod addition;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod newton;
pub(crate) mod sqrt;


/// Build the BigFloat nearest to `mant × 2^lsb_exp` at the precision of
/// the context, negated if `neg`
///
/// If `sticky` is set, the true magnitude lies strictly between `mant` and
/// `mant + 1` units of `2^lsb_exp`; callers setting it must supply more
/// bits than the context precision.
///
/// A zero mantissa produces a zero carrying the sign `neg`. Results whose
/// exponent leaves the range of `i64` saturate to infinity or zero.
///
pub(crate) fn make_rounded(
    neg: bool,
    mut mant: BigUint,
    lsb_exp: i128,
    sticky: bool,
    ctx: &Context,
) -> BigFloat {
    if mant.is_zero() {
        debug_assert!(!sticky, "inexact zero mantissa");
        return BigFloat::new_zero(neg, ctx);
    }

    let prec = ctx.precision().get();
    let bit_count = mant.bits();
    let mut exp = lsb_exp + bit_count as i128;

    if bit_count > prec {
        let drop_count = bit_count - prec;
        let sign = if neg { Sign::Minus } else { Sign::Plus };

        // first dropped bit, and whether everything below it is zero
        let guard = mant.bit(drop_count - 1) as u8;
        let trailing_zeros = !sticky && trailing_zero_count(&mant) >= drop_count - 1;

        mant >>= drop_count;
        let lsb = mant.bit(0) as u8;
        let rounded = ctx.rounding_mode().round_pair(sign, (lsb, guard), trailing_zeros);
        if rounded > lsb {
            mant += 1u8;
            // carry rippled into a new leading bit: 0.111.. -> 1.000..
            if mant.bits() > prec {
                mant >>= 1u8;
                exp += 1;
            }
        }
    } else {
        debug_assert!(!sticky, "sticky bit requires mantissa wider than precision");
    }

    let tz = trailing_zero_count(&mant);
    if tz > 0 {
        mant >>= tz;
    }

    let exp = match i64::try_from(exp) {
        Ok(exp) => exp,
        Err(_) if exp > 0 => return BigFloat::new_infinite(neg, ctx),
        Err(_) => return BigFloat::new_zero(neg, ctx),
    };

    BigFloat {
        mant: mant,
        exp: exp,
        neg: neg,
        form: Form::Finite,
        ctx: *ctx,
    }
}

/// Number of zero bits below the lowest set bit (zero for zero)
#[inline]
pub(crate) fn trailing_zero_count(n: &BigUint) -> u64 {
    n.trailing_zeros().unwrap_or(0)
}


#[cfg(test)]
pub(crate) mod test_util {
    use crate::*;

    /// Weight of the last mantissa bit of a value with the exponent of `x`
    pub(crate) fn ulp(x: &BigFloat) -> BigFloat {
        BigFloat::from_mant_exp(&BigFloat::one(), x.exp.saturating_sub(x.precision() as i64))
    }

    /// Assert `actual` is no more than `n` units in the last place of
    /// `expected` away from it
    pub(crate) fn assert_within_ulps(actual: &BigFloat, expected: &BigFloat, n: u32) {
        let exact = Context::default()
            .with_prec(actual.precision() + expected.precision() + 64)
            .unwrap();
        let diff = actual.sub_with_context(expected, &exact).abs();
        let bound = ulp(expected).mul_with_context(&BigFloat::from(n), &exact);
        assert!(
            diff <= bound,
            "{:?} differs from {:?} by more than {} ulp",
            actual, expected, n
        );
    }
}


#[cfg(test)]
mod test_make_rounded {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $mant:literal, $prec:literal, $mode:ident => $expected:literal ) => {
            paste! {
                #[test]
                fn [< case_ $name _ $mode:snake >]() {
                    let ctx = Context::new(NonZeroU64::new($prec).unwrap(), RoundingMode::$mode);
                    let rounded = make_rounded(false, BigUint::from($mant as u64), 0, false, &ctx);
                    let expected = BigFloat::from($expected as u64);
                    assert_eq!(rounded, expected);
                    assert!(rounded.mant.bits() <= $prec);
                    assert!(rounded.mant.bit(0));
                }
            }
        };
    }

    // 0b1011_0100 = 180
    impl_case!(b10110100_p4: 0b1011_0100u64, 4, HalfEven => 0b1011_0000u64);
    impl_case!(b10110100_p4: 0b1011_0100u64, 4, Up => 0b1100_0000u64);
    impl_case!(b10110100_p3: 0b1011_0100u64, 3, HalfEven => 0b1100_0000u64);
    impl_case!(b10110100_p3: 0b1011_0100u64, 3, HalfDown => 0b1100_0000u64);
    impl_case!(b10110100_p3: 0b1011_0100u64, 3, Down => 0b1010_0000u64);

    // exactly halfway 0b1011_1000 = 184
    impl_case!(b10111000_p4: 0b1011_1000u64, 4, HalfEven => 0b1100_0000u64);
    impl_case!(b10111000_p4: 0b1011_1000u64, 4, HalfDown => 0b1011_0000u64);
    impl_case!(b10101000_p4: 0b1010_1000u64, 4, HalfEven => 0b1010_0000u64);
    impl_case!(b10101000_p4: 0b1010_1000u64, 4, HalfUp => 0b1011_0000u64);

    // carry into a new leading bit
    impl_case!(b11111100_p5: 0b1111_1100u64, 5, HalfEven => 0b1_0000_0000u64);
    impl_case!(b11111001_p5: 0b1111_1001u64, 5, Ceiling => 0b1_0000_0000u64);
    impl_case!(b11111001_p5: 0b1111_1001u64, 5, Floor => 0b1111_1000u64);

    // narrower than precision: unchanged
    impl_case!(b101_p64: 0b101u64, 64, Up => 0b101u64);

    #[test]
    fn carry_increments_exponent() {
        let ctx = Context::new(NonZeroU64::new(3).unwrap(), RoundingMode::Up);
        let rounded = make_rounded(false, BigUint::from(0b1111u8), -4, false, &ctx);
        // 0.1111₂ rounds up to 1.0
        assert_eq!(rounded.exp, 1);
        assert_eq!(rounded.mant, BigUint::from(1u8));
    }

    #[test]
    fn sticky_bit_breaks_ties() {
        let ctx = Context::new(NonZeroU64::new(3).unwrap(), RoundingMode::HalfEven);

        // 101|1 is a tie, rounding to even (101 -> 110)
        let rounded = make_rounded(false, BigUint::from(0b1011u8), 0, false, &ctx);
        assert_eq!(rounded, BigFloat::from(0b1100u8));

        // 100|1 is a tie, rounding to even stays at 100
        let rounded = make_rounded(false, BigUint::from(0b1001u8), 0, false, &ctx);
        assert_eq!(rounded, BigFloat::from(0b1000u8));

        // with something beyond the last bit it is above halfway
        let rounded = make_rounded(false, BigUint::from(0b1001u8), 0, true, &ctx);
        assert_eq!(rounded, BigFloat::from(0b1010u8));
    }

    #[test]
    fn negative_rounding_uses_sign() {
        let ctx = Context::new(NonZeroU64::new(2).unwrap(), RoundingMode::Floor);
        let rounded = make_rounded(true, BigUint::from(0b101u8), 0, false, &ctx);
        assert_eq!(rounded, BigFloat::from(-6));

        let ctx = ctx.with_rounding_mode(RoundingMode::Ceiling);
        let rounded = make_rounded(true, BigUint::from(0b101u8), 0, false, &ctx);
        assert_eq!(rounded, BigFloat::from(-4));
    }

    #[test]
    fn exponent_out_of_range_saturates() {
        let ctx = Context::new(NonZeroU64::new(2).unwrap(), RoundingMode::HalfEven);

        // 0.1111₂ × 2^MAX rounds up past the largest exponent
        let rounded = make_rounded(false, BigUint::from(0b1111u8), i64::MAX as i128 - 4, false, &ctx);
        assert!(rounded.is_infinite());
        assert!(rounded.is_sign_positive());

        let rounded = make_rounded(true, BigUint::from(0b101u8), i64::MIN as i128 - 10, false, &ctx);
        assert!(rounded.is_zero());
        assert!(rounded.is_sign_negative());

        // the lowest exponent is still finite
        let rounded = make_rounded(false, BigUint::one(), i64::MIN as i128 - 1, false, &ctx);
        assert_eq!(rounded.exp, i64::MIN);
    }

    #[test]
    fn zero_mantissa_keeps_sign() {
        let ctx = Context::default();
        let z = make_rounded(true, BigUint::zero(), 10, false, &ctx);
        assert!(z.is_zero());
        assert!(z.is_sign_negative());
    }
}
