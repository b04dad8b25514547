//! Code for num_traits

use crate::*;


/// Exponent of the lowest bit of the smallest subnormal f64
const F64_MIN_LSB_EXP: i64 = -1074;
/// Bits in an f64 mantissa, including the implicit leading bit
const F64_MANTISSA_BITS: i64 = 53;
/// Values with an exponent above this overflow an f64
const F64_MAX_EXP: i64 = 1024;


impl Zero for BigFloat {
    #[inline]
    fn zero() -> BigFloat {
        BigFloat::new_zero(false, &Context::default())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.form == Form::Zero
    }
}

impl One for BigFloat {
    #[inline]
    fn one() -> BigFloat {
        BigFloat::from_biguint_with_context(false, BigUint::one(), &Context::default())
    }
}


impl BigFloat {
    /// Nearest f64, ties to even
    ///
    /// Values beyond the f64 range become infinite, values below half the
    /// smallest subnormal become zero; signs are kept.
    pub(crate) fn to_native(&self) -> f64 {
        let sign = if self.neg { -1.0 } else { 1.0 };
        match self.form {
            Form::Zero => return sign * 0.0,
            Form::Infinite => return sign * f64::INFINITY,
            Form::Finite => {}
        }

        if self.exp > F64_MAX_EXP {
            return sign * f64::INFINITY;
        }

        // lowest bit an f64 can hold at this magnitude
        let lsb = cmp::max(self.exp.saturating_sub(F64_MANTISSA_BITS), F64_MIN_LSB_EXP);

        let rounded = match NonZeroU64::new((self.exp - lsb).max(0) as u64) {
            Some(prec) => self.with_precision_round(prec, RoundingMode::HalfEven),
            // below the last subnormal bit: 0.1xxx × 2^lsb rounds to 2^lsb,
            // unless it is exactly the halfway point (ties to zero, the even side)
            None if self.exp == lsb && self.mant != BigUint::one() => {
                BigFloat::from_mant_exp(&BigFloat::one(), lsb).with_context(&self.ctx)
            }
            None => return sign * 0.0,
        };

        if rounded.exp > F64_MAX_EXP {
            return sign * f64::INFINITY;
        }

        // at most 53 bits, so exactly one u64 digit
        let mant = rounded.mant.iter_u64_digits().next().unwrap_or(0);
        sign * libm::scalbn(mant as f64, rounded.lsb_exp() as i32)
    }

    /// Integer part, rounding towards zero
    ///
    /// `None` for infinities and for values of more than `max_bits` bits.
    fn to_bigint_truncated(&self, max_bits: i64) -> Option<BigInt> {
        match self.form {
            Form::Zero => return Some(BigInt::zero()),
            Form::Infinite => return None,
            Form::Finite => {}
        }
        if self.exp > max_bits {
            return None;
        }
        if self.exp <= 0 {
            return Some(BigInt::zero());
        }

        let lsb = self.lsb_exp();
        let magnitude = if lsb >= 0 {
            &self.mant << lsb as u64
        } else {
            &self.mant >> (-lsb) as u64
        };
        let sign = if self.neg { Sign::Minus } else { Sign::Plus };
        Some(BigInt::from_biguint(sign, magnitude))
    }
}


impl ToPrimitive for BigFloat {
    fn to_i64(&self) -> Option<i64> {
        self.to_bigint_truncated(64).and_then(|n| n.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_bigint_truncated(128).and_then(|n| n.to_i128())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_bigint_truncated(64).and_then(|n| n.to_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_bigint_truncated(128).and_then(|n| n.to_u128())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_native())
    }
}


impl FromPrimitive for BigFloat {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigFloat::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigFloat::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigFloat::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigFloat::from(n))
    }

    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        BigFloat::try_from(n).ok()
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        BigFloat::try_from(n).ok()
    }
}


#[cfg(test)]
mod test_to_f64 {
    use super::*;
    use crate::stdlib;

    macro_rules! impl_case {
        ($name:ident: $f:expr) => {
            #[test]
            fn $name() {
                let f: f64 = $f;
                let n = BigFloat::try_from(f).unwrap();
                assert_eq!(n.to_f64().unwrap().to_bits(), f.to_bits());
            }
        };
    }

    impl_case!(case_875en6: 0.000875);
    impl_case!(case_8712994288722404: 0.8712994288722404);
    impl_case!(case_f64_min: f64::MIN);
    impl_case!(case_f64_max: f64::MAX);
    impl_case!(case_zero: 0.0);
    impl_case!(case_neg_zero: -0.0);
    impl_case!(case_pi: stdlib::f64::consts::PI);
    impl_case!(case_neg_pi_6: -3.14159);
    impl_case!(case_smallest_subnormal: 5e-324);
    impl_case!(case_neg_subnormal: -1.5e-320);
    impl_case!(case_infinity: f64::INFINITY);

    fn pow2(exp: i64) -> BigFloat {
        BigFloat::from_mant_exp(&BigFloat::one(), exp)
    }

    #[test]
    fn rounds_wide_mantissa_half_even() {
        let one = BigFloat::one().with_prec(200);

        // 1 + 2^-53 is halfway, the even neighbor is 1
        let halfway = &one + &pow2(-53);
        assert_eq!(halfway.to_f64(), Some(1.0));

        // just above halfway rounds up
        let above = &halfway + &pow2(-150);
        assert_eq!(above.to_f64(), Some(1.0 + f64::EPSILON));

        // 1 + 3·2^-53 is halfway, the even neighbor is above
        let halfway = &one + &pow2(-53) + &pow2(-52);
        assert_eq!(halfway.to_f64(), Some(1.0 + 2.0 * f64::EPSILON));
    }

    #[test]
    fn rounds_into_subnormals() {
        // half of the smallest subnormal ties to zero
        assert_eq!(pow2(-1075).to_f64(), Some(0.0));
        // anything more rounds up to it
        let above = (&pow2(-1075) + &pow2(-1100)).with_prec(100);
        assert_eq!(above.to_f64(), Some(5e-324));
        assert_eq!((-above).to_f64(), Some(-5e-324));
        // far below
        assert_eq!(pow2(-5000).to_f64(), Some(0.0));

        // 1.5 × 2^-1074 ties to 2 × 2^-1074
        let tie = &pow2(-1074) + &pow2(-1075);
        assert_eq!(tie.to_f64(), Some(1e-323));
    }

    #[test]
    fn overflows_to_infinity() {
        assert_eq!(pow2(1024).to_f64(), Some(f64::INFINITY));
        assert_eq!((-pow2(5000)).to_f64(), Some(f64::NEG_INFINITY));

        // rounds up past f64::MAX
        let max = BigFloat::try_from(f64::MAX).unwrap().with_prec(100);
        let just_over = &max + &pow2(1023 - 53);
        assert_eq!(just_over.to_f64(), Some(f64::INFINITY));
    }
}
