//! Implementation of comparison operations
//!
//! BigFloats compare by numeric value: precision and rounding mode are
//! ignored, and the two zeros are equal.
//!

use crate::*;

use crate::stdlib::hash::{Hash, Hasher};


impl PartialEq for BigFloat {
    #[inline]
    fn eq(&self, rhs: &BigFloat) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    #[inline]
    fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    /// Complete ordering implementation for BigFloat
    ///
    /// # Example
    ///
    /// ```
    /// use bigfloat::BigFloat;
    /// use bigfloat::num_bigint::Sign;
    ///
    /// let a = BigFloat::from(-1);
    /// let b = BigFloat::from(1);
    /// assert!(a < b);
    /// let c = BigFloat::try_from(0.5).unwrap();
    /// assert!(c < b);
    /// assert!(BigFloat::infinity(Sign::Minus) < a);
    /// assert_eq!(BigFloat::zero_with_sign(Sign::Minus), BigFloat::zero_with_sign(Sign::Plus));
    /// ```
    fn cmp(&self, other: &BigFloat) -> Ordering {
        let rank_cmp = self.rank().cmp(&other.rank());
        if rank_cmp != Ordering::Equal || self.form != Form::Finite {
            return rank_cmp;
        }

        let result = compare_magnitudes(self, other);
        if self.neg {
            result.reverse()
        } else {
            result
        }
    }
}

impl Hash for BigFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // mantissa and exponent are canonical, so equal values share them;
        // zeros hash alike regardless of sign
        self.form.hash(state);
        if self.form != Form::Zero {
            self.neg.hash(state);
            self.mant.hash(state);
            self.exp.hash(state);
        }
    }
}


impl BigFloat {
    /// Position in the coarse order −∞ < negative < 0 < positive < +∞
    fn rank(&self) -> i8 {
        match (self.form, self.neg) {
            (Form::Zero, _) => 0,
            (Form::Finite, false) => 1,
            (Form::Finite, true) => -1,
            (Form::Infinite, false) => 2,
            (Form::Infinite, true) => -2,
        }
    }
}

/// Compare absolute values of two finite nonzero BigFloats
fn compare_magnitudes(a: &BigFloat, b: &BigFloat) -> Ordering {
    let exp_cmp = a.exp.cmp(&b.exp);
    if exp_cmp != Ordering::Equal {
        return exp_cmp;
    }

    // same leading bit position: align the mantissas on it
    let a_bits = a.mant.bits();
    let b_bits = b.mant.bits();
    match a_bits.cmp(&b_bits) {
        Ordering::Equal => a.mant.cmp(&b.mant),
        Ordering::Greater => a.mant.cmp(&(&b.mant << (a_bits - b_bits))),
        Ordering::Less => (&a.mant << (b_bits - a_bits)).cmp(&b.mant),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn float(f: f64) -> BigFloat {
        BigFloat::try_from(f).unwrap()
    }

    #[test]
    fn orders_like_f64() {
        let values = [
            f64::NEG_INFINITY, -1e300, -2.5, -2.25, -1.0, -1e-300, 0.0,
            1e-310, 0.375, 0.5, 1.0, 1.0 + f64::EPSILON, 3.0, 1e300, f64::INFINITY,
        ];
        for &a in values.iter() {
            for &b in values.iter() {
                let ord = float(a).cmp(&float(b));
                assert_eq!(Some(ord), a.partial_cmp(&b), "{} <=> {}", a, b);
            }
        }
    }

    #[test]
    fn precision_is_ignored() {
        let a = BigFloat::from(3).with_prec(2);
        let b = BigFloat::from(3).with_prec(500);
        assert_eq!(a, b);

        let c = BigFloat::from_mant_exp(&BigFloat::from(0b1100_0001), -6).with_prec(500);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn signed_zeros_are_equal() {
        let pos = BigFloat::zero();
        let neg = BigFloat::zero_with_sign(Sign::Minus);
        assert_eq!(pos, neg);
        assert_eq!(pos.cmp(&neg), Ordering::Equal);
        assert!(neg < BigFloat::try_from(1e-300).unwrap());
        assert!(pos > BigFloat::try_from(-1e-300).unwrap());
    }

    #[test]
    #[cfg(feature = "std")]
    fn equal_values_hash_alike() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(BigFloat::from(12).with_prec(10));
        set.insert(BigFloat::try_from(12.0).unwrap());
        set.insert(BigFloat::zero());
        set.insert(BigFloat::zero_with_sign(Sign::Minus));
        set.insert(BigFloat::from(-12));
        assert_eq!(set.len(), 3);
    }
}
