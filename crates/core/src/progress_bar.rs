use crate::model::ProgressPercent;

/// Fraction of the bar to fill for `percent`, clamped to `[0, 1]`.
#[must_use]
pub fn width_fraction(percent: i64) -> f64 {
    ProgressPercent::clamped(percent).width_fraction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_unit_range() {
        assert_eq!(width_fraction(-10), 0.0);
        assert_eq!(width_fraction(150), 1.0);
        assert_eq!(width_fraction(45), 0.45);
        assert_eq!(width_fraction(0), 0.0);
        assert_eq!(width_fraction(100), 1.0);
    }
}
