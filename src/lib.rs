// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Big Float
//!
//! `BigFloat` stores a binary floating point number `± 0.1xxx₂ × 2^exp`
//! whose mantissa may be as wide as you like. Each value carries its own
//! [`Context`]: the number of bits of mantissa it keeps, and the
//! [`RoundingMode`] used to drop the rest.
//!
//! Internally, `BigFloat` uses a `BigUint` mantissa paired with a 64-bit
//! exponent, so the exponent range is that of an `i64`.
//!
//! Every arithmetic operation computes the exact result and rounds it once
//! to the precision of the requested context. Zeros are signed, infinities
//! are supported, and there is no NaN: operations which would produce one
//! panic, much like integer division by zero.
//!
//! The headline operation is [`BigFloat::sqrt`], a Newton iteration which
//! doubles its working precision on every step.
//!
//! # Example
//!
//! ```
//! use bigfloat::BigFloat;
//!
//! let two = BigFloat::from(2u8).with_prec(200);
//! let root = two.sqrt().unwrap();
//! assert_eq!(root.precision(), 200);
//!
//! let four = BigFloat::from(4u8).with_prec(200);
//! assert_eq!(four.sqrt().unwrap(), BigFloat::from(2u8));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::{self, Ordering};
use self::stdlib::convert::TryFrom;
use self::stdlib::fmt;
use self::stdlib::num::NonZeroU64;
use self::stdlib::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{FromPrimitive, One, ToPrimitive, Zero};


// const DEFAULT_PRECISION: u64 = ${RUST_BIGFLOAT_DEFAULT_PRECISION} or 53;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

#[macro_use]
mod macros;

// rounded arithmetic and the square root solvers
mod arithmetic;

// From<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;

// PartialEq, Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

pub mod rounding;
pub use rounding::RoundingMode;

// Mathematical context
mod context;
pub use context::Context;


/// Kind of value stored in a `BigFloat`
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
enum Form {
    Zero,
    Finite,
    Infinite,
}

/// A big binary floating point type.
///
#[derive(Clone)]
pub struct BigFloat {
    // value is 0.mant × 2^exp; mant is odd and at most ctx.precision bits wide.
    // Zero and infinity have an empty mantissa and zero exponent.
    mant: BigUint,
    exp: i64,
    neg: bool,
    form: Form,
    ctx: Context,
}

#[cfg(not(feature = "std"))]
// f64::sqrt is only available in std, we have to use an external crate like libm
fn native_sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
fn native_sqrt(x: f64) -> f64 {
    x.sqrt()
}

impl BigFloat {
    #[inline]
    pub(crate) fn new_zero(neg: bool, ctx: &Context) -> BigFloat {
        BigFloat {
            mant: BigUint::zero(),
            exp: 0,
            neg: neg,
            form: Form::Zero,
            ctx: *ctx,
        }
    }

    #[inline]
    pub(crate) fn new_infinite(neg: bool, ctx: &Context) -> BigFloat {
        BigFloat {
            mant: BigUint::zero(),
            exp: 0,
            neg: neg,
            form: Form::Infinite,
            ctx: *ctx,
        }
    }

    /// Round the integer `n` (negated if `neg`) to the given context
    pub(crate) fn from_biguint_with_context(neg: bool, n: BigUint, ctx: &Context) -> BigFloat {
        arithmetic::make_rounded(neg, n, 0, false, ctx)
    }

    /// Zero with the given sign, at default precision
    ///
    /// `Sign::NoSign` produces positive zero.
    ///
    /// ```
    /// # use bigfloat::{BigFloat, num_bigint::Sign};
    /// let z = BigFloat::zero_with_sign(Sign::Minus);
    /// assert!(z.is_sign_negative());
    /// assert_eq!(z, BigFloat::zero_with_sign(Sign::Plus));
    /// ```
    pub fn zero_with_sign(sign: Sign) -> BigFloat {
        BigFloat::new_zero(sign == Sign::Minus, &Context::default())
    }

    /// Infinity with the given sign, at default precision
    ///
    /// `Sign::NoSign` produces positive infinity.
    pub fn infinity(sign: Sign) -> BigFloat {
        BigFloat::new_infinite(sign == Sign::Minus, &Context::default())
    }

    /// Number of bits kept in the mantissa of this value
    #[inline]
    pub fn precision(&self) -> u64 {
        self.ctx.precision().get()
    }

    /// The precision and rounding mode attached to this value
    #[inline]
    pub fn context(&self) -> Context {
        self.ctx
    }

    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        self.ctx.rounding_mode()
    }

    /// Return the sign of the `BigFloat` as `num::bigint::Sign`.
    ///
    /// Both zeros report `Sign::NoSign`; use
    /// [`is_sign_negative`](BigFloat::is_sign_negative) to tell them apart.
    ///
    /// ```
    /// # use bigfloat::{BigFloat, num_bigint::Sign};
    /// assert_eq!(BigFloat::from(-3).sign(), Sign::Minus);
    /// assert_eq!(BigFloat::zero_with_sign(Sign::Minus).sign(), Sign::NoSign);
    /// assert_eq!(BigFloat::infinity(Sign::Plus).sign(), Sign::Plus);
    /// ```
    #[inline]
    pub fn sign(&self) -> Sign {
        match (self.form, self.neg) {
            (Form::Zero, _) => Sign::NoSign,
            (_, true) => Sign::Minus,
            (_, false) => Sign::Plus,
        }
    }

    /// True if the sign bit is set, including negative zero
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.neg
    }

    #[inline]
    pub fn is_sign_positive(&self) -> bool {
        !self.neg
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.form == Form::Infinite
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.form != Form::Infinite
    }

    /// Exponent of the lowest mantissa bit
    #[inline]
    pub(crate) fn lsb_exp(&self) -> i128 {
        self.exp as i128 - self.mant.bits() as i128
    }

    /// Split into a mantissa in `[0.5, 1)` and a binary exponent
    ///
    /// The mantissa keeps the context of `self`. Zeros and infinities
    /// are returned unchanged with exponent zero.
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let (mant, exp) = BigFloat::from(12u8).mant_exp();
    /// assert_eq!(mant, BigFloat::try_from(0.75).unwrap());
    /// assert_eq!(exp, 4);
    /// ```
    pub fn mant_exp(&self) -> (BigFloat, i64) {
        match self.form {
            Form::Finite => {
                let mut mant = self.clone();
                mant.exp = 0;
                (mant, self.exp)
            }
            _ => (self.clone(), 0),
        }
    }

    /// Return `mant × 2^exp`
    ///
    /// Inverse of [`mant_exp`](BigFloat::mant_exp); `mant` need not be
    /// normalized. Exponents past the range of `i64` saturate to infinity
    /// or zero.
    pub fn from_mant_exp(mant: &BigFloat, exp: i64) -> BigFloat {
        if mant.form != Form::Finite {
            return mant.clone();
        }
        match mant.exp.checked_add(exp) {
            Some(new_exp) => {
                let mut result = mant.clone();
                result.exp = new_exp;
                result
            }
            None if exp > 0 => BigFloat::new_infinite(mant.neg, &mant.ctx),
            None => BigFloat::new_zero(mant.neg, &mant.ctx),
        }
    }

    /// Return this value times two (exact)
    #[inline]
    pub fn double(&self) -> BigFloat {
        BigFloat::from_mant_exp(self, 1)
    }

    /// Return this value divided by two (exact)
    #[inline]
    pub fn half(&self) -> BigFloat {
        BigFloat::from_mant_exp(self, -1)
    }

    /// Return the absolute value
    #[inline]
    pub fn abs(&self) -> BigFloat {
        let mut result = self.clone();
        result.neg = false;
        result
    }

    /// Return this value rounded to the precision of the context
    ///
    /// The result carries `ctx` as its context.
    pub fn with_context(&self, ctx: &Context) -> BigFloat {
        match self.form {
            Form::Finite => {
                arithmetic::make_rounded(self.neg, self.mant.clone(), self.lsb_exp(), false, ctx)
            }
            _ => {
                let mut result = self.clone();
                result.ctx = *ctx;
                result
            }
        }
    }

    /// Return this value with precision set to `prec` bits, rounding with
    /// the value's own rounding mode
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let n = BigFloat::from(0b1011_1001u8);
    /// assert_eq!(n.with_prec(4), BigFloat::from(0b1100_0000u8));
    /// assert_eq!(n.with_prec(5), BigFloat::from(0b1011_1000u8));
    /// assert_eq!(n.with_prec(4).precision(), 4);
    /// ```
    ///
    /// # Panics
    ///
    /// If `prec` is zero.
    pub fn with_prec(&self, prec: u64) -> BigFloat {
        match self.ctx.with_prec(prec) {
            Some(ctx) => self.with_context(&ctx),
            None => panic!("BigFloat precision must be greater than zero"),
        }
    }

    /// Return this value with the given precision, rounding if needed
    pub fn with_precision_round(&self, prec: NonZeroU64, round: RoundingMode) -> BigFloat {
        self.with_context(&Context::new(prec, round))
    }

    /// Return `self + rhs` rounded to the context
    ///
    /// # Panics
    ///
    /// If the operands are infinities of opposite sign.
    pub fn add_with_context(&self, rhs: &BigFloat, ctx: &Context) -> BigFloat {
        arithmetic::addition::impl_add(self, rhs, false, ctx)
    }

    /// Return `self - rhs` rounded to the context
    ///
    /// # Panics
    ///
    /// If the operands are infinities of the same sign.
    pub fn sub_with_context(&self, rhs: &BigFloat, ctx: &Context) -> BigFloat {
        arithmetic::addition::impl_add(self, rhs, true, ctx)
    }

    /// Return `self × rhs` rounded to the context
    ///
    /// # Panics
    ///
    /// If one operand is zero and the other infinite.
    pub fn mul_with_context(&self, rhs: &BigFloat, ctx: &Context) -> BigFloat {
        arithmetic::multiplication::impl_mul(self, rhs, ctx)
    }

    /// Return `self / rhs` rounded to the context
    ///
    /// Division of a nonzero value by zero gives a signed infinity.
    ///
    /// # Panics
    ///
    /// If both operands are zero, or both are infinite.
    pub fn div_with_context(&self, rhs: &BigFloat, ctx: &Context) -> BigFloat {
        arithmetic::division::impl_div(self, rhs, ctx)
    }

    /// Square this number, keeping its precision
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let n = BigFloat::from(-7).with_prec(8);
    /// assert_eq!(n.square(), BigFloat::from(49));
    /// ```
    #[inline]
    pub fn square(&self) -> BigFloat {
        self.square_with_context(&self.ctx)
    }

    #[inline]
    pub fn square_with_context(&self, ctx: &Context) -> BigFloat {
        arithmetic::multiplication::impl_mul(self, self, ctx)
    }

    /// Take the square root of the number
    ///
    /// The result has the same context as `self`. Square roots of zeros keep
    /// their sign, the root of +∞ is +∞, and any negative value (including
    /// −∞) is a domain error.
    ///
    /// ```
    /// # use bigfloat::{BigFloat, ArithmeticError};
    /// let n = BigFloat::try_from(0.25).unwrap().with_prec(10);
    /// assert_eq!(n.sqrt().unwrap(), BigFloat::try_from(0.5).unwrap());
    ///
    /// let n = BigFloat::from(-5);
    /// assert_eq!(n.sqrt(), Err(ArithmeticError::Domain));
    /// ```
    #[inline]
    pub fn sqrt(&self) -> Result<BigFloat, ArithmeticError> {
        arithmetic::sqrt::impl_sqrt(self, &self.ctx)
    }

    /// Take the square root of the number, rounded to the given context
    pub fn sqrt_with_context(&self, ctx: &Context) -> Result<BigFloat, ArithmeticError> {
        arithmetic::sqrt::impl_sqrt(self, ctx)
    }
}


/// Errors from fallible `BigFloat` operations
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Argument lies outside the domain of the function,
    /// e.g. the square root of a negative number
    Domain,
    /// Value is not a number
    NotANumber,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            Domain => "Argument outside of function domain".fmt(f),
            NotANumber => "Value is not a number".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}


impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.neg { "-" } else { "" };
        match self.form {
            Form::Zero => write!(f, "BigFloat({}0, prec={})", sign, self.precision()),
            Form::Infinite => write!(f, "BigFloat({}inf, prec={})", sign, self.precision()),
            Form::Finite => {
                // align the mantissa on a hex digit: 0x.<digits>p<exp>
                let pad = (4 - self.mant.bits() % 4) % 4;
                let digits = (&self.mant << pad).to_str_radix(16);
                write!(f, "BigFloat({}0x.{}p{:+}, prec={})", sign, digits, self.exp, self.precision())
            }
        }
    }
}




#[cfg(all(test, property_tests))]
extern crate proptest;
