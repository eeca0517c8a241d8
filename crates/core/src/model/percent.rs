use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion indicator in `[0, 100]`.
///
/// Construction always clamps, so values coming from unvalidated input
/// (imports, forms) cannot break the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct ProgressPercent(u8);

impl ProgressPercent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction of a full bar, in `[0, 1]`.
    #[must_use]
    pub fn width_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<i64> for ProgressPercent {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<ProgressPercent> for u8 {
    fn from(value: ProgressPercent) -> Self {
        value.0
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(ProgressPercent::clamped(-5), ProgressPercent::ZERO);
        assert_eq!(ProgressPercent::clamped(250), ProgressPercent::FULL);
        assert_eq!(ProgressPercent::clamped(75).value(), 75);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(ProgressPercent::clamped(45).to_string(), "45%");
    }
}
