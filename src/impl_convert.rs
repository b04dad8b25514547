//! Code for implementing From/To BigFloats

use crate::*;
use crate::stdlib::num::FpCategory;


/// Smallest precision given to a value converted from an integer
const MIN_INTEGER_PRECISION: NonZeroU64 = match NonZeroU64::new(64) {
    Some(prec) => prec,
    None => panic!("integer precision is nonzero"),
};

const F64_PRECISION: NonZeroU64 = match NonZeroU64::new(53) {
    Some(prec) => prec,
    None => panic!("f64 precision is nonzero"),
};

const F32_PRECISION: NonZeroU64 = match NonZeroU64::new(24) {
    Some(prec) => prec,
    None => panic!("f32 precision is nonzero"),
};


/// Context wide enough to hold an integer of `bits` bits exactly
fn integer_context(bits: u64) -> Context {
    let prec = NonZeroU64::new(bits).map_or(MIN_INTEGER_PRECISION, |p| cmp::max(p, MIN_INTEGER_PRECISION));
    Context::default().with_precision(prec)
}


macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for BigFloat {
            fn from(n: $t) -> Self {
                let ctx = integer_context(<$t>::BITS as u64);
                BigFloat::from_biguint_with_context(false, BigUint::from(n), &ctx)
            }
        }

        impl From<&$t> for BigFloat {
            fn from(n: &$t) -> Self {
                BigFloat::from(*n)
            }
        }
    };
}

macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for BigFloat {
            fn from(n: $t) -> Self {
                let ctx = integer_context(<$t>::BITS as u64);
                BigFloat::from_biguint_with_context(n < 0, BigUint::from(n.unsigned_abs()), &ctx)
            }
        }

        impl From<&$t> for BigFloat {
            fn from(n: &$t) -> Self {
                BigFloat::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);


impl From<BigUint> for BigFloat {
    fn from(n: BigUint) -> Self {
        let ctx = integer_context(n.bits());
        BigFloat::from_biguint_with_context(false, n, &ctx)
    }
}

impl From<BigInt> for BigFloat {
    fn from(n: BigInt) -> Self {
        let ctx = integer_context(n.bits());
        let (sign, magnitude) = n.into_parts();
        BigFloat::from_biguint_with_context(sign == Sign::Minus, magnitude, &ctx)
    }
}


/// Return mantissa and exponent of the lowest mantissa bit of a
/// finite, nonzero float
///
/// ```math
/// |f| = frac * 2^pow
/// ```
fn split_f64_into_parts(f: f64) -> (u64, i64) {
    let bits = f.to_bits();
    let frac = bits & ((1 << 52) - 1);
    let exp = ((bits >> 52) & 0x7FF) as i64;

    match exp {
        // subnormal: no implicit leading bit
        0 => (frac, -1074),
        _ => (frac | (1 << 52), exp - 1023 - 52),
    }
}

fn split_f32_into_parts(f: f32) -> (u32, i64) {
    let bits = f.to_bits();
    let frac = bits & ((1 << 23) - 1);
    let exp = ((bits >> 23) & 0xFF) as i64;

    match exp {
        0 => (frac, -149),
        _ => (frac | (1 << 23), exp - 127 - 23),
    }
}


impl TryFrom<f64> for BigFloat {
    type Error = ArithmeticError;

    /// Exact conversion, at 53 bits of precision
    ///
    /// Infinities convert to infinities; NaN is an error.
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        let ctx = Context::default().with_precision(F64_PRECISION);
        let neg = n.is_sign_negative();

        match n.classify() {
            FpCategory::Nan => Err(ArithmeticError::NotANumber),
            FpCategory::Infinite => Ok(BigFloat::new_infinite(neg, &ctx)),
            FpCategory::Zero => Ok(BigFloat::new_zero(neg, &ctx)),
            FpCategory::Normal | FpCategory::Subnormal => {
                let (frac, pow) = split_f64_into_parts(n);
                Ok(arithmetic::make_rounded(neg, BigUint::from(frac), pow.into(), false, &ctx))
            }
        }
    }
}

impl TryFrom<f32> for BigFloat {
    type Error = ArithmeticError;

    /// Exact conversion, at 24 bits of precision
    fn try_from(n: f32) -> Result<Self, Self::Error> {
        let ctx = Context::default().with_precision(F32_PRECISION);
        let neg = n.is_sign_negative();

        match n.classify() {
            FpCategory::Nan => Err(ArithmeticError::NotANumber),
            FpCategory::Infinite => Ok(BigFloat::new_infinite(neg, &ctx)),
            FpCategory::Zero => Ok(BigFloat::new_zero(neg, &ctx)),
            FpCategory::Normal | FpCategory::Subnormal => {
                let (frac, pow) = split_f32_into_parts(n);
                Ok(arithmetic::make_rounded(neg, BigUint::from(frac), pow.into(), false, &ctx))
            }
        }
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_int_case {
        ($t:ident: $n:expr => prec=$prec:literal) => {
            paste! {
                #[test]
                fn [< from_ $t >]() {
                    let n: $t = $n;
                    let value = BigFloat::from(n);
                    assert_eq!(value.precision(), $prec);
                    assert_eq!(BigFloat::from(&n), value);
                    assert_eq!(value, BigFloat::from(BigInt::from(n)));
                    assert_eq!(value.to_i128(), (n as i128).into());
                }
            }
        };
    }

    impl_int_case!(u8: 200 => prec=64);
    impl_int_case!(u16: 65535 => prec=64);
    impl_int_case!(u32: 123456789 => prec=64);
    impl_int_case!(u64: u64::MAX => prec=64);
    impl_int_case!(u128: 1 << 100 => prec=128);
    impl_int_case!(i8: -128 => prec=64);
    impl_int_case!(i16: -30000 => prec=64);
    impl_int_case!(i32: i32::MIN => prec=64);
    impl_int_case!(i64: i64::MIN => prec=64);
    impl_int_case!(i128: -(1 << 120) - 1 => prec=128);

    #[test]
    fn from_big_integers() {
        let n = BigUint::from(3u8).pow(200);
        let value = BigFloat::from(n.clone());
        assert_eq!(value.precision(), n.bits());
        assert_eq!(value.mant, n);
        assert_eq!(value.lsb_exp(), 0);

        let value = BigFloat::from(BigInt::from_biguint(Sign::Minus, n));
        assert!(value.is_sign_negative());

        let value = BigFloat::from(BigUint::from(12u8));
        assert_eq!(value.precision(), 64);
        assert_eq!(value.mant, BigUint::from(3u8));
        assert_eq!(value.exp, 4);

        let value = BigFloat::from(BigUint::zero());
        assert!(value.is_zero());
    }

    macro_rules! impl_f64_case {
        ($name:ident: $f:expr => mant=$mant:literal, exp=$exp:literal) => {
            #[test]
            fn $name() {
                let f: f64 = $f;
                let value = BigFloat::try_from(f).unwrap();
                assert_eq!(value.mant, BigUint::from($mant as u64));
                assert_eq!(value.exp, $exp);
                assert_eq!(value.is_sign_negative(), f.is_sign_negative());
                assert_eq!(value.precision(), 53);
                assert_eq!(value.to_f64(), Some(f));
            }
        };
    }

    impl_f64_case!(f64_one: 1.0 => mant=1, exp=1);
    impl_f64_case!(f64_neg_three: -3.0 => mant=3, exp=2);
    impl_f64_case!(f64_three_eighths: 0.375 => mant=3, exp=-1);
    impl_f64_case!(f64_max: f64::MAX => mant=0x1f_ffff_ffff_ffffu64, exp=1024);
    impl_f64_case!(f64_min_positive: f64::MIN_POSITIVE => mant=1, exp=-1021);
    impl_f64_case!(f64_smallest_subnormal: 5e-324 => mant=1, exp=-1073);
    impl_f64_case!(f64_largest_subnormal: f64::MIN_POSITIVE - 5e-324 => mant=0xf_ffff_ffff_ffffu64, exp=-1022);

    #[test]
    fn f64_special_values() {
        assert_eq!(BigFloat::try_from(f64::NAN), Err(ArithmeticError::NotANumber));

        let inf = BigFloat::try_from(f64::NEG_INFINITY).unwrap();
        assert!(inf.is_infinite());
        assert!(inf.is_sign_negative());

        let zero = BigFloat::try_from(-0.0f64).unwrap();
        assert!(zero.is_zero());
        assert!(zero.is_sign_negative());
    }

    #[test]
    fn from_f32() {
        let value = BigFloat::try_from(0.1f32).unwrap();
        assert_eq!(value.precision(), 24);
        assert_eq!(value, BigFloat::try_from(0.1f32 as f64).unwrap());

        let value = BigFloat::try_from(f32::from_bits(1)).unwrap();
        assert_eq!(value, BigFloat::from_mant_exp(&BigFloat::one(), -149));

        assert_eq!(BigFloat::try_from(f32::NAN), Err(ArithmeticError::NotANumber));
        assert!(BigFloat::try_from(f32::INFINITY).unwrap().is_infinite());
    }
}
