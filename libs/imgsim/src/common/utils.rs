/// Rounds half away from zero, e.g. 12.345 -> 12.35.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keeps a percentage score inside [0, 100]. NaN maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(100.0), 100.0);
        assert_eq!(round_to_hundredths(69.994), 69.99);
        assert_eq!(round_to_hundredths(0.004), 0.0);
        assert_eq!(round_to_hundredths(33.3333333), 33.33);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(100.0000001), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }
}
