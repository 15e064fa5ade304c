//! Exact ratios between two road lengths.

use std::fmt;

use crate::road::Weight;

/// The quotient of two non-negative lengths, kept as an exact fraction.
///
/// Display renders the quotient with two decimals rounded half-up. A zero
/// denominator renders as `NaN` when the numerator is also zero and as
/// `Infinity` otherwise.
///
/// # Examples
/// ```
/// use roadnet_core::Ratio;
///
/// assert_eq!(Ratio::new(8, 18).to_string(), "0.44");
/// assert_eq!(Ratio::new(1, 8).to_string(), "0.13");
/// assert_eq!(Ratio::new(0, 0).to_string(), "NaN");
/// assert_eq!(Ratio::new(3, 0).to_string(), "Infinity");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ratio {
    numerator: Weight,
    denominator: Weight,
}

impl Ratio {
    /// Creates the ratio `numerator / denominator`.
    #[must_use]
    pub const fn new(numerator: Weight, denominator: Weight) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn numerator(&self) -> Weight { self.numerator }

    /// Returns the denominator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn denominator(&self) -> Weight { self.denominator }

    /// Returns `true` when the denominator is zero.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.denominator == 0
    }

    /// Returns the quotient as a float, `NaN` or infinite when degenerate.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns the quotient scaled by 100 and rounded half-up, or `None` when
    /// degenerate.
    fn hundredths(&self) -> Option<u128> {
        if self.is_degenerate() {
            return None;
        }
        let numerator = u128::from(self.numerator);
        let denominator = u128::from(self.denominator);
        Some((numerator * 200 + denominator) / (2 * denominator))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hundredths() {
            Some(scaled) => write!(f, "{}.{:02}", scaled / 100, scaled % 100),
            None if self.numerator == 0 => f.write_str("NaN"),
            None => f.write_str("Infinity"),
        }
    }
}
