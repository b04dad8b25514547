//! Define arithmetical context
//!

use crate::rounding::RoundingMode;
use crate::stdlib::cmp;
use crate::stdlib::num::NonZeroU64;
use num_traits::ToPrimitive;

use crate::DEFAULT_PRECISION;

// Compile-time check of the build-time precision
const DEFAULT_NONZERO_PRECISION: NonZeroU64 = match NonZeroU64::new(DEFAULT_PRECISION) {
    Some(prec) => prec,
    None => panic!("DEFAULT_PRECISION must be greater than zero"),
};

/// Mathematical Context
///
/// Stores the number of mantissa bits kept by the result of an arithmetic
/// operation, and the rounding mode used to drop the remaining bits.
///
/// Every `BigFloat` carries one of these; operator traits combine the
/// contexts of their operands, `*_with_context` methods take one directly.
///
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Context {
    /// precision in bits
    precision: NonZeroU64,
    /// rounding mode
    rounding: RoundingMode,
}

impl Context {
    /// Create context with precision and rounding mode
    pub fn new(precision: NonZeroU64, rounding: RoundingMode) -> Self {
        Context {
            precision: precision,
            rounding: rounding,
        }
    }

    /// Copy context with new precision value
    ///
    /// Returns `None` if the precision is zero or does not fit in a `u64`.
    pub fn with_prec<T: ToPrimitive>(&self, precision: T) -> Option<Self> {
        precision
            .to_u64()
            .and_then(NonZeroU64::new)
            .map(|prec| self.with_precision(prec))
    }

    /// Copy context with new precision value
    pub fn with_precision(&self, precision: NonZeroU64) -> Self {
        Self {
            precision: precision,
            ..*self
        }
    }

    /// Copy context with new rounding mode
    pub fn with_rounding_mode(&self, mode: RoundingMode) -> Self {
        Self {
            rounding: mode,
            ..*self
        }
    }

    /// Return maximum precision
    pub fn precision(&self) -> NonZeroU64 {
        self.precision
    }

    /// Return rounding mode
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Context for the result of an operator combining two values:
    /// the wider precision, and the rounding mode of the left hand side
    pub(crate) fn merge(lhs: &Context, rhs: &Context) -> Context {
        Context {
            precision: cmp::max(lhs.precision, rhs.precision),
            rounding: lhs.rounding,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_NONZERO_PRECISION,
            rounding: RoundingMode::default(),
        }
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn constructor_and_setters() {
        let ctx = Context::default();
        let c = ctx.with_prec(44).unwrap();
        assert_eq!(c.precision.get(), 44);
        assert_eq!(c.rounding, RoundingMode::HalfEven);

        let c = c.with_rounding_mode(RoundingMode::Down);
        assert_eq!(c.precision.get(), 44);
        assert_eq!(c.rounding, RoundingMode::Down);
    }

    #[test]
    fn zero_precision_is_rejected() {
        assert_eq!(Context::default().with_prec(0), None);
        assert_eq!(Context::default().with_prec(-3), None);
    }

    #[test]
    fn default_precision() {
        assert_eq!(Context::default().precision().get(), DEFAULT_PRECISION);
    }

    #[test]
    fn merge_keeps_wider_precision_and_left_rounding() {
        let lhs = Context::default().with_prec(60).unwrap().with_rounding_mode(RoundingMode::Ceiling);
        let rhs = Context::default().with_prec(200).unwrap().with_rounding_mode(RoundingMode::Floor);

        let merged = Context::merge(&lhs, &rhs);
        assert_eq!(merged.precision().get(), 200);
        assert_eq!(merged.rounding_mode(), RoundingMode::Ceiling);

        let merged = Context::merge(&rhs, &lhs);
        assert_eq!(merged.precision().get(), 200);
        assert_eq!(merged.rounding_mode(), RoundingMode::Floor);
    }
}
