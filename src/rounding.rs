//! Rounding structures and subroutines

use crate::Sign;

/// Determines how to calculate the last bit of the mantissa
///
/// Examples show a value rounded to an integer, written in binary.
///
/// Default rounding mode is HalfEven
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Always round away from zero
    ///
    /// * 10.1 → 11
    /// * 11.01 → 100
    /// * -10.01 → -11
    Up,

    /// Always round towards zero
    ///
    /// * 10.1 → 10
    /// * 11.11 → 11
    /// * -11.11 → -11
    Down,

    /// Towards +∞
    ///
    /// * 10.01 → 11
    /// * -10.11 → -10
    Ceiling,

    /// Towards -∞
    ///
    /// * 10.11 → 10
    /// * -10.01 → -11
    Floor,

    /// Round to 'nearest neighbor', or away from zero if exactly halfway
    ///
    /// * 10.1 → 11
    /// * 11.1 → 100
    /// * -10.1 → -11
    /// * 10.01 → 10
    HalfUp,

    /// Round to 'nearest neighbor', or towards zero if exactly halfway
    ///
    /// * 10.1 → 10
    /// * 11.1 → 11
    /// * 10.11 → 11
    /// * -10.1 → -10
    HalfDown,

    /// Round to 'nearest neighbor', if equidistant, round towards
    /// the neighbor ending in a zero bit
    ///
    /// * 10.1 → 10
    /// * 11.1 → 100
    /// * 10.11 → 11
    /// * -11.1 → -100
    ///
    #[default]
    HalfEven,
}


impl RoundingMode {
    /// Perform the rounding operation
    ///
    /// Parameters
    /// ----------
    /// * sign (Sign) - Sign of the number to be rounded
    /// * pair (u8, u8) - The two bits in question to be rounded: the last
    ///     bit kept, and the first bit dropped. Both must be 0 or 1.
    /// * trailing_zeros (bool) - True if all bits after the pair are zero.
    ///       This decides the rounding of exactly halfway values.
    ///
    /// Returns
    /// -------
    /// Returns the first bit of the pair, rounded; either the bit itself
    /// or the bit plus one (which may carry). The sign is not preserved.
    ///
    /// Examples
    /// --------
    /// - To round 10.1₂ to an integer, pass in `Plus, (0, 1), true` → 0 or 1 depending on scheme
    /// - To round -11.011₂, pass in `Minus, (1, 0), false` → 1, or 2 for `Up` and `Floor`
    ///
    pub fn round_pair(&self, sign: Sign, pair: (u8, u8), trailing_zeros: bool) -> u8 {
        use self::RoundingMode::*;

        let (lhs, rhs) = pair;
        debug_assert!(lhs < 2 && rhs < 2);

        // if all zero after bit, never round
        if rhs == 0 && trailing_zeros {
            return lhs;
        }
        let up = lhs + 1;
        let down = lhs;
        match (*self, rhs) {
            (Up,        _) => up,
            (Down,      _) => down,
            (Floor,     _) => if sign == Sign::Minus { up } else { down },
            (Ceiling,   _) => if sign == Sign::Minus { down } else { up },
            // below halfway
            (_,         0) => down,
            // above halfway
            (_,         _) if !trailing_zeros => up,
            (HalfUp,    _) => up,
            (HalfDown,  _) => down,
            (HalfEven,  _) => if lhs % 2 == 0 { down } else { up },
        }
    }
}
