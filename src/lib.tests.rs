// Tests of the public BigFloat interface, included by lib.rs

use crate::arithmetic::test_util::assert_within_ulps;

fn float(f: f64) -> BigFloat {
    BigFloat::try_from(f).unwrap()
}

fn pow2(exp: i64) -> BigFloat {
    BigFloat::from_mant_exp(&BigFloat::one(), exp)
}


mod sign {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $value:expr => $sign:ident, negative=$neg:literal) => {
            #[test]
            fn $name() {
                let value: BigFloat = $value;
                assert_eq!(value.sign(), Sign::$sign);
                assert_eq!(value.is_sign_negative(), $neg);
                assert_eq!(value.is_sign_positive(), !$neg);
            }
        };
    }

    impl_case!(case_pos: float(2.5) => Plus, negative=false);
    impl_case!(case_neg: float(-2.5) => Minus, negative=true);
    impl_case!(case_zero: BigFloat::zero() => NoSign, negative=false);
    impl_case!(case_neg_zero: BigFloat::zero_with_sign(Sign::Minus) => NoSign, negative=true);
    impl_case!(case_no_sign_zero: BigFloat::zero_with_sign(Sign::NoSign) => NoSign, negative=false);
    impl_case!(case_inf: BigFloat::infinity(Sign::Plus) => Plus, negative=false);
    impl_case!(case_neg_inf: BigFloat::infinity(Sign::Minus) => Minus, negative=true);
    impl_case!(case_neg_abs: float(-2.5).abs() => Plus, negative=false);
    impl_case!(case_neg_inf_abs: BigFloat::infinity(Sign::Minus).abs() => Plus, negative=false);
}


mod classify {
    use super::*;

    #[test]
    fn finite_values() {
        let n = float(-7.0);
        assert!(n.is_finite());
        assert!(!n.is_infinite());
        assert!(!n.is_zero());

        let z = BigFloat::zero();
        assert!(z.is_finite());
        assert!(z.is_zero());
    }

    #[test]
    fn infinite_values() {
        let inf = BigFloat::infinity(Sign::Minus);
        assert!(inf.is_infinite());
        assert!(!inf.is_finite());
        assert!(!inf.is_zero());
        assert_eq!(inf.precision(), DEFAULT_PRECISION);
    }
}


mod mant_exp {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:expr => $mant:expr, $exp:literal) => {
            #[test]
            fn $name() {
                let n = float($input);
                let (mant, exp) = n.mant_exp();
                assert_eq!(mant, float($mant));
                assert_eq!(exp, $exp);
                assert_eq!(BigFloat::from_mant_exp(&mant, exp), n);
                assert_eq!(mant.precision(), n.precision());
            }
        };
    }

    impl_case!(case_1: 1.0 => 0.5, 1);
    impl_case!(case_12: 12.0 => 0.75, 4);
    impl_case!(case_neg_12: -12.0 => -0.75, 4);
    impl_case!(case_0d375: 0.375 => 0.75, -1);
    impl_case!(case_0d5: 0.5 => 0.5, 0);
    impl_case!(case_1en300: 1e-300 => 0.6696928794914171, -996);

    #[test]
    fn special_values_keep_exponent_zero() {
        let (mant, exp) = BigFloat::zero_with_sign(Sign::Minus).mant_exp();
        assert!(mant.is_zero());
        assert!(mant.is_sign_negative());
        assert_eq!(exp, 0);

        let (mant, exp) = BigFloat::infinity(Sign::Plus).mant_exp();
        assert!(mant.is_infinite());
        assert_eq!(exp, 0);

        assert_eq!(BigFloat::from_mant_exp(&BigFloat::zero(), 100), BigFloat::zero());
    }

    #[test]
    fn exponent_overflow_saturates() {
        let big = pow2(i64::MAX - 1);
        assert!(BigFloat::from_mant_exp(&big, 2).is_infinite());
        assert!(big.double().is_infinite());

        let small = pow2(i64::MIN + 1);
        let underflow = BigFloat::from_mant_exp(&-small, -3);
        assert!(underflow.is_zero());
        assert!(underflow.is_sign_negative());
    }

    #[test]
    fn double_and_half() {
        let n = float(0.375).with_prec(2);
        assert_eq!(n.double(), float(0.75));
        assert_eq!(n.half(), float(0.1875));
        assert_eq!(n.half().precision(), 2);
        assert_eq!(n.double().half(), n);
    }
}


mod with_prec {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $prec:literal, $mode:ident => $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _ $mode:snake >]() {
                    let n = float($input).with_context(&Context::default().with_rounding_mode(RoundingMode::$mode));
                    let rounded = n.with_prec($prec);
                    assert_eq!(rounded, float($expected));
                    assert_eq!(rounded.precision(), $prec);
                    assert_eq!(rounded.rounding_mode(), RoundingMode::$mode);

                    let prec = NonZeroU64::new($prec).unwrap();
                    assert_eq!(float($input).with_precision_round(prec, RoundingMode::$mode), rounded);
                }
            }
        };
    }

    // 0.1011011₂
    impl_case!(case_0d7109375_p3: 0.7109375, 3, HalfEven => 0.75);
    impl_case!(case_0d7109375_p3: 0.7109375, 3, Down => 0.625);
    impl_case!(case_0d7109375_p3: 0.7109375, 3, Floor => 0.625);
    impl_case!(case_0d7109375_p4: 0.7109375, 4, HalfEven => 0.6875);
    impl_case!(case_0d7109375_p4: 0.7109375, 4, Ceiling => 0.75);
    impl_case!(case_neg_0d7109375_p4: -0.7109375, 4, Floor => -0.75);
    impl_case!(case_neg_0d7109375_p4: -0.7109375, 4, Ceiling => -0.6875);
    impl_case!(case_neg_0d7109375_p4: -0.7109375, 4, Up => -0.75);
    // 111.1₂ ties
    impl_case!(case_7d5_p3: 7.5, 3, HalfEven => 8.0);
    impl_case!(case_7d5_p3: 7.5, 3, HalfDown => 7.0);
    impl_case!(case_6d5_p3: 6.5, 3, HalfEven => 6.0);
    impl_case!(case_6d5_p3: 6.5, 3, HalfUp => 7.0);

    #[test]
    fn widening_is_exact() {
        let n = float(0.1);
        let wide = n.with_prec(1000);
        assert_eq!(wide, n);
        assert_eq!(wide.precision(), 1000);
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn zero_precision_panics() {
        float(1.0).with_prec(0);
    }

    #[test]
    fn specials_take_new_context() {
        let z = BigFloat::zero_with_sign(Sign::Minus).with_prec(7);
        assert_eq!(z.precision(), 7);
        assert!(z.is_sign_negative());

        let inf = BigFloat::infinity(Sign::Plus).with_prec(9);
        assert_eq!(inf.precision(), 9);
        assert!(inf.is_infinite());
    }
}


mod square {
    use super::*;

    #[test]
    fn square_keeps_precision() {
        let n = float(1.0 + f64::EPSILON);
        let sq = n.square();
        assert_eq!(sq.precision(), 53);
        // (1 + 2^-52)² = 1 + 2^-51 + 2^-104
        assert_eq!(sq, float(1.0 + 2.0 * f64::EPSILON));

        let wide = Context::default().with_prec(106).unwrap();
        let exact = n.square_with_context(&wide);
        assert_eq!(exact, &(&BigFloat::one() + &pow2(-51)).with_prec(106) + &pow2(-104));
    }

    #[test]
    fn square_of_negative() {
        assert_eq!(float(-1.5).square(), float(2.25));
        assert_eq!(BigFloat::infinity(Sign::Minus).square(), BigFloat::infinity(Sign::Plus));
        assert!(BigFloat::zero_with_sign(Sign::Minus).square().is_sign_positive());
    }
}


mod sqrt {
    use super::*;

    #[test]
    fn sqrt_four_at_many_precisions() {
        for prec in (3..300).step_by(7).chain([128, 129, 2000]) {
            let four = BigFloat::from(4).with_prec(prec);
            let root = four.sqrt().unwrap();
            assert_eq!(root, BigFloat::from(2), "precision {}", prec);
            assert_eq!(root.precision(), prec);
        }
    }

    #[test]
    fn sqrt_two_is_native() {
        let root = BigFloat::from(2).with_prec(53).sqrt().unwrap();
        assert_eq!(root.to_f64(), Some(2f64.sqrt()));
        assert_eq!(root, float(2f64.sqrt()));
    }

    #[test]
    fn sqrt_of_native_values() {
        for &f in &[0.5, 3.0, 10.0, 1e-300, 123.456, 1e300, 5e-324, 7.0, 0.1] {
            let root = float(f).sqrt().unwrap();
            assert_eq!(root.to_f64(), Some(f.sqrt()), "sqrt({})", f);
        }
    }

    #[test]
    fn sqrt_with_context() {
        let z = BigFloat::from(2);
        let ctx = Context::default().with_prec(300).unwrap();
        let root = z.sqrt_with_context(&ctx).unwrap();
        assert_eq!(root.precision(), 300);
        assert_eq!(z.precision(), 64);

        let wide = Context::default().with_prec(600).unwrap();
        assert_within_ulps(&root.square_with_context(&wide).with_prec(300), &z.with_prec(300), 1);
    }

    #[test]
    fn sqrt_keeps_rounding_mode() {
        let ctx = Context::default().with_rounding_mode(RoundingMode::Ceiling);
        let seven = BigFloat::from(7).with_context(&ctx);
        let root = seven.sqrt().unwrap();
        assert_eq!(root.rounding_mode(), RoundingMode::Ceiling);

        // the root is the smallest 53 bit value whose square reaches 7
        let exact = Context::default().with_prec(106).unwrap();
        let below = &root - &crate::arithmetic::test_util::ulp(&root);
        assert!(root.square_with_context(&exact) > seven);
        assert!(below.square_with_context(&exact) < seven);
    }

    macro_rules! impl_rounding_case {
        ($name:ident: sqrt($input:literal) at $prec:literal, $mode:ident => $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _ $mode:snake >]() {
                    let ctx = Context::default().with_prec($prec).unwrap().with_rounding_mode(RoundingMode::$mode);
                    let root = float($input).sqrt_with_context(&ctx).unwrap();
                    assert_eq!(root, float($expected));
                    assert_eq!(root.context(), ctx);
                }
            }
        };
    }

    // √2 = 1.0110101₂
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, Down => 1.25);
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, Floor => 1.25);
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, Up => 1.5);
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, Ceiling => 1.5);
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, HalfEven => 1.5);
    impl_rounding_case!(case_sqrt_2_p3: sqrt(2.0) at 3, HalfDown => 1.5);
    // √7 = 10.101001₂
    impl_rounding_case!(case_sqrt_7_p4: sqrt(7.0) at 4, Down => 2.5);
    impl_rounding_case!(case_sqrt_7_p4: sqrt(7.0) at 4, Up => 2.75);
    impl_rounding_case!(case_sqrt_7_p4: sqrt(7.0) at 4, HalfEven => 2.75);
    // √0.5 = 0.10110101₂
    impl_rounding_case!(case_sqrt_0d5_p2: sqrt(0.5) at 2, Down => 0.5);
    impl_rounding_case!(case_sqrt_0d5_p2: sqrt(0.5) at 2, Up => 0.75);
    // exact roots are not moved
    impl_rounding_case!(case_sqrt_4_p5: sqrt(4.0) at 5, Down => 2.0);
    impl_rounding_case!(case_sqrt_4_p5: sqrt(4.0) at 5, Up => 2.0);
    // √2.25 = 1.1₂ is a tie at one bit
    impl_rounding_case!(case_sqrt_2d25_p1: sqrt(2.25) at 1, HalfEven => 2.0);
    impl_rounding_case!(case_sqrt_2d25_p1: sqrt(2.25) at 1, HalfUp => 2.0);
    impl_rounding_case!(case_sqrt_2d25_p1: sqrt(2.25) at 1, HalfDown => 1.0);
    impl_rounding_case!(case_sqrt_2d25_p1: sqrt(2.25) at 1, Down => 1.0);

    #[test]
    fn directed_roots_bracket_at_high_precision() {
        let two = BigFloat::from(2);
        let ctx = Context::default().with_prec(300).unwrap();
        let exact = Context::default().with_prec(600).unwrap();

        let down = two.sqrt_with_context(&ctx.with_rounding_mode(RoundingMode::Down)).unwrap();
        let up = two.sqrt_with_context(&ctx.with_rounding_mode(RoundingMode::Up)).unwrap();
        assert!(down.square_with_context(&exact) < two);
        assert!(up.square_with_context(&exact) > two);
        assert_eq!(up.sub_with_context(&down, &exact), crate::arithmetic::test_util::ulp(&down));
    }

    #[test]
    fn sqrt_of_f64_max_rounds_below_midpoint() {
        // √(f64::MAX) lies just below a rounding midpoint
        let root = float(f64::MAX).sqrt().unwrap();
        assert_eq!(root.to_f64(), Some(f64::MAX.sqrt()));
    }

    #[test]
    fn sqrt_errors() {
        assert_eq!(float(-5.0).sqrt(), Err(ArithmeticError::Domain));
        assert_eq!(float(-1e-300).sqrt(), Err(ArithmeticError::Domain));
        assert_eq!(BigFloat::infinity(Sign::Minus).sqrt(), Err(ArithmeticError::Domain));
    }

    #[test]
    fn sqrt_signed_zero() {
        let root = BigFloat::zero_with_sign(Sign::Minus).sqrt().unwrap();
        assert!(root.is_zero());
        assert!(root.is_sign_negative());

        let root = BigFloat::zero().sqrt().unwrap();
        assert!(root.is_zero());
        assert!(root.is_sign_positive());
    }

    #[test]
    fn sqrt_large_power_of_ten() {
        let z = BigFloat::from(BigUint::from(10u8).pow(400)).with_prec(200);
        let root = z.sqrt().unwrap();
        assert_eq!(root.precision(), 200);
        assert_within_ulps(&root.square(), &z, 1);
    }

    fn random_float(rng: &mut oorandom::Rand64, prec: u64) -> BigFloat {
        let words = rng.rand_range(1..10);
        let digits: Vec<u64> = (0..words).map(|_| rng.rand_u64()).collect();
        let mant = BigUint::from_slice(
            &digits.iter().flat_map(|d| [*d as u32, (*d >> 32) as u32]).collect::<Vec<u32>>()
        );
        let exp = rng.rand_range(0..4000) as i64 - 2000;
        BigFloat::from_mant_exp(&BigFloat::from(mant).with_prec(prec), exp)
    }

    #[test]
    fn random_squares_within_one_ulp() {
        let mut rng = oorandom::Rand64::new(0x5eed_0f_b16f_10a7);

        for _ in 0..200 {
            let prec = rng.rand_range(1..700);
            let z = random_float(&mut rng, prec);
            if z.is_zero() {
                continue;
            }
            let root = z.sqrt().unwrap();
            assert_eq!(root.precision(), prec);
            assert_within_ulps(&root.square(), &z, 1);
        }
    }

    #[test]
    fn random_monotonic() {
        let mut rng = oorandom::Rand64::new(7);

        for _ in 0..100 {
            let prec = rng.rand_range(2..400);
            let a = random_float(&mut rng, prec);
            let b = random_float(&mut rng, prec);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            assert!(lo.sqrt().unwrap() <= hi.sqrt().unwrap(), "{:?} {:?}", lo, hi);

            // neighbors one ulp apart
            let next = (&hi + &crate::arithmetic::test_util::ulp(&hi)).with_context(&hi.context());
            assert!(hi.sqrt().unwrap() <= next.sqrt().unwrap());
        }
    }
}


mod arithmetic_error {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ArithmeticError::Domain.to_string(), "Argument outside of function domain");
        assert_eq!(ArithmeticError::NotANumber.to_string(), "Value is not a number");
    }

    #[test]
    #[cfg(feature = "std")]
    fn is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ArithmeticError::Domain);
    }
}


mod debug_format {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $value:expr => $expected:literal) => {
            #[test]
            fn $name() {
                let value: BigFloat = $value;
                assert_eq!(format!("{:?}", value), $expected);
            }
        };
    }

    impl_case!(case_1: float(1.0) => "BigFloat(0x.8p+1, prec=53)");
    impl_case!(case_neg_12: float(-12.0) => "BigFloat(-0x.cp+4, prec=53)");
    impl_case!(case_0d1: float(0.1) => "BigFloat(0x.ccccccccccccdp-3, prec=53)");
    impl_case!(case_zero: BigFloat::zero().with_prec(8) => "BigFloat(0, prec=8)");
    impl_case!(case_neg_zero: BigFloat::zero_with_sign(Sign::Minus) => "BigFloat(-0, prec=53)");
    impl_case!(case_inf: BigFloat::infinity(Sign::Plus) => "BigFloat(inf, prec=53)");
}
