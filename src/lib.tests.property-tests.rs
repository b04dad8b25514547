// Property tests to be included by lib.rs (if enabled)

use crate::arithmetic::test_util::assert_within_ulps;


mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< add_ $t >](n: $t, f: f64) {
                    prop_assume!(f.is_finite());
                    let x = BigFloat::from(n);
                    let y = BigFloat::try_from(f).unwrap();

                    let sum = &x + &y;
                    prop_assert_eq!(&sum, &(&y + &x));
                    prop_assert_eq!(&sum, &(x.clone() + y.clone()));
                    prop_assert_eq!(sum.precision(), x.precision());
                }

                #[test]
                fn [< sub_ $t >](n: $t, f: f64) {
                    prop_assume!(f.is_finite());
                    let x = BigFloat::from(n);
                    let y = BigFloat::try_from(f).unwrap();

                    prop_assert_eq!(&x - &y, -(&y - &x));
                }

                #[test]
                fn [< mul_ $t >](n: $t, f: f64) {
                    prop_assume!(f.is_finite());
                    let x = BigFloat::from(n);
                    let y = BigFloat::try_from(f).unwrap();

                    let prod = &x * &y;
                    prop_assert_eq!(&prod, &(&y * &x));
                    prop_assert_eq!(-prod, &(-&x) * &y);
                }

                #[test]
                fn [< sqrt_of_square_ $t >](n: $t) {
                    let x = BigFloat::from(n);
                    let wide = x.context().with_prec(2 * x.precision()).unwrap();
                    let square = x.square_with_context(&wide);

                    let root = square.sqrt_with_context(&x.context()).unwrap();
                    prop_assert_eq!(root, x.abs());
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);
    impl_test!(i8);
    impl_test!(i16);
    impl_test!(i32);
    impl_test!(i64);
    impl_test!(i128);
}


mod sqrt {
    use super::*;

    proptest! {
        #[test]
        fn matches_native(f: f64) {
            prop_assume!(f.is_normal() && f > 0.0);

            let root = BigFloat::try_from(f).unwrap().sqrt().unwrap();
            prop_assert_eq!(root.to_f64(), Some(f.sqrt()));
        }

        #[test]
        fn square_is_within_one_ulp(f: f64, p: u16) {
            prop_assume!(f.is_normal());
            let prec = p as u64 % 1000 + 1;

            let z = BigFloat::try_from(f.abs()).unwrap().with_prec(prec);
            let root = z.sqrt().unwrap();
            prop_assert_eq!(root.precision(), prec);
            assert_within_ulps(&root.square(), &z, 1);
        }

        #[test]
        fn negative_is_domain_error(f: f64) {
            prop_assume!(f < 0.0);

            let z = BigFloat::try_from(f).unwrap();
            prop_assert_eq!(z.sqrt(), Err(ArithmeticError::Domain));
        }

        #[test]
        fn monotonic(a: f64, b: f64, p: u16) {
            prop_assume!(a.is_finite() && b.is_finite());
            let prec = p as u64 % 500 + 1;

            let a = BigFloat::try_from(a.abs()).unwrap().with_prec(prec);
            let b = BigFloat::try_from(b.abs()).unwrap().with_prec(prec);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(lo.sqrt().unwrap() <= hi.sqrt().unwrap());
        }
    }
}
