/// Substitute `default` for a missing value. Survey matrices encode "no
/// answer" as null, and a handful of entries arrive as NaN; both count as
/// missing.
pub fn value_or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => default,
    }
}

/// Combine two possibly-missing values after substituting `default` for the
/// missing ones. Straight-line substitution, no recursion: the result is
/// computed in one pass no matter how malformed the inputs are.
pub fn combine_or_default(
    x: Option<f64>,
    y: Option<f64>,
    default: f64,
    combine: impl Fn(f64, f64) -> f64,
) -> f64 {
    combine(value_or_default(x, default), value_or_default(y, default))
}

/// Max of the two reports, missing counted as 0
pub fn max_or_zero(x: Option<f64>, y: Option<f64>) -> f64 {
    combine_or_default(x, y, 0.0, f64::max)
}

/// Mean of the two estimates, missing counted as 0
pub fn mean_or_zero(x: Option<f64>, y: Option<f64>) -> f64 {
    combine_or_default(x, y, 0.0, |a, b| (a + b) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_combine_as_zero() {
        assert_eq!(max_or_zero(None, Some(2.0)), 2.0);
        assert_eq!(max_or_zero(Some(f64::NAN), Some(2.0)), 2.0);
        assert_eq!(max_or_zero(None, None), 0.0);

        assert_eq!(mean_or_zero(Some(4.0), None), 2.0);
        assert_eq!(mean_or_zero(None, None), 0.0);
        assert_eq!(mean_or_zero(Some(f64::NAN), Some(f64::NAN)), 0.0);
    }

    #[test]
    fn present_values_combine_directly() {
        assert_eq!(max_or_zero(Some(1.0), Some(3.0)), 3.0);
        assert_eq!(mean_or_zero(Some(1.0), Some(3.0)), 2.0);
    }
}
