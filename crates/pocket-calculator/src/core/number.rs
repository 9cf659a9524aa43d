//! Display number formatting and parsing
//!
//! Results are rendered the way a browser renders a number as text:
//! the shortest digit string that round-trips, no trailing `.0`, and
//! exponent notation only outside `1e-7 < |x| < 1e21`.

use crate::core::{CalcError, CalcResult};

/// Largest decimal exponent (exclusive) rendered without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent (exclusive) rendered without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a number for the calculator display.
///
/// ```
/// use pocket_calculator::core::number::format_number;
///
/// assert_eq!(format_number(56.0), "56");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_positive(-value));
    }
    format_positive(value)
}

fn format_positive(value: f64) -> String {
    let (digits, exponent) = shortest_digits(value);
    let k = digits.len() as i32;
    // decimal point position relative to the start of `digits`
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        let mut out = digits;
        out.push_str(&"0".repeat((n - k) as usize));
        out
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", e.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Splits a positive finite value into its shortest round-trip digit
/// string and the decimal exponent of the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    let repr = format!("{value:e}");
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent = exponent.parse().unwrap_or(0);
    (digits, exponent)
}

/// Returns true if `text` is a plain decimal literal (optional leading
/// `-`, digits, at most one `.`) that digit entry may extend.
///
/// Exponent forms such as `1e-7` and `Infinity`/`NaN` are not: appending
/// to them would change their meaning or make them unparseable.
#[must_use]
pub fn is_plain_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    !body.is_empty()
        && body.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && body.matches('.').count() <= 1
}

/// Parses display text back into a number.
///
/// Accepts everything [`format_number`] produces plus in-progress entries
/// such as `"0."` or `"12."`.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    match trimmed {
        "Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        "NaN" => return Ok(f64::NAN),
        _ => {}
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(-0.125), "-0.125");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.5e-10), "1.5e-10");
    }

    #[test]
    fn test_format_large_values() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.25e22), "1.25e+22");
        assert_eq!(format_number(-1e21), "-1e+21");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_entries() {
        assert_eq!(parse_number("0").unwrap(), 0.0);
        assert_eq!(parse_number("0.").unwrap(), 0.0);
        assert_eq!(parse_number("12.5").unwrap(), 12.5);
        assert_eq!(parse_number("-7").unwrap(), -7.0);
        assert_eq!(parse_number("1e+21").unwrap(), 1e21);
        assert_eq!(parse_number("1e-7").unwrap(), 1e-7);
    }

    #[test]
    fn test_parse_special_values() {
        assert_eq!(parse_number("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_number("1..2"),
            Err(CalcError::InvalidNumber("1..2".into()))
        );
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_is_plain_literal() {
        assert!(is_plain_literal("0"));
        assert!(is_plain_literal("-12.5"));
        assert!(is_plain_literal("3."));
        assert!(!is_plain_literal("1e-7"));
        assert!(!is_plain_literal("1.5e+22"));
        assert!(!is_plain_literal("Infinity"));
        assert!(!is_plain_literal("NaN"));
        assert!(!is_plain_literal("-"));
        assert!(!is_plain_literal(""));
    }

    #[test]
    fn test_format_parse_round_trip() {
        for value in [0.1, -2.5, 1e21, 3e-9, 123_456.789, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(parse_number(&format_number(value)).unwrap(), value);
        }
    }
}
