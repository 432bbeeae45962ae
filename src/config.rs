//! Bounded tunables read from `data-*` attributes on an effect's mount point.

use std::str::FromStr;

/// Parses `raw`, falling back to `default` when absent or invalid and clamping into `bounds`.
pub fn parse_with_bounds<T>(raw: Option<&str>, default: T, bounds: (T, T)) -> T
where
    T: FromStr + PartialOrd + Copy,
{
    let Some(value) = raw
        .and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| value.partial_cmp(value).is_some())
    else {
        return default;
    };

    if value < bounds.0 {
        bounds.0
    } else if value > bounds.1 {
        bounds.1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_invalid_uses_default() {
        assert_eq!(parse_with_bounds::<usize>(None, 100, (1, 400)), 100);
        assert_eq!(parse_with_bounds::<usize>(Some("lots"), 100, (1, 400)), 100);
        assert_eq!(parse_with_bounds::<f64>(Some(""), 150.0, (20.0, 400.0)), 150.0);
    }

    #[test]
    fn values_are_clamped() {
        assert_eq!(parse_with_bounds::<usize>(Some("0"), 100, (1, 400)), 1);
        assert_eq!(parse_with_bounds::<usize>(Some(" 900 "), 100, (1, 400)), 400);
        assert_eq!(parse_with_bounds::<f64>(Some("12.5"), 14.0, (0.0, 45.0)), 12.5);
    }

    #[test]
    fn nan_uses_default() {
        assert_eq!(parse_with_bounds::<f64>(Some("NaN"), 1.1, (1.0, 1.5)), 1.1);
    }
}
