/// Coerce form text into a number the way a browser `Number(text)` does.
///
/// Blank input is `0`, anything unparseable is `NaN`. NaN is not rejected
/// here: it serializes as JSON `null` and the backend decides what to do.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan", which a browser would not.
    let plain = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if !plain {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(coerce_number("100"), 100.0);
        assert_eq!(coerce_number(" 8 "), 8.0);
        assert_eq!(coerce_number("-2.5"), -2.5);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn test_malformed_is_nan() {
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("1,5").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("1e").is_nan());
    }

    #[test]
    fn test_infinity_literal() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }
}
