//! Decimal text ⇄ f64 for the conversion form.
//!
//! Pure functions — no I/O, no side effects. Parsing never fails:
//! input without a numeric prefix becomes NaN, which then flows
//! through the formulas and renders as the literal text "NaN".

const INFINITY: &str = "Infinity";

/// Parse the longest decimal prefix of `text`.
///
/// Leading whitespace is skipped and trailing characters after the
/// number are ignored, so `"12kg"` is 12. Accepted forms:
/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one digit
/// in the mantissa, and `[+-]Infinity`. Anything else is NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with(INFINITY) {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Fractional digits needed to print any finite f64 exactly
/// (the smallest subnormal has 1074).
const EXACT_DIGITS: usize = 1100;

/// Format `value` with exactly `precision` decimals.
///
/// Rounds half away from zero on the exact binary value, so 34.25 at one
/// decimal is "34.3" while 1.005 (stored as 1.00499…) at two is "1.00".
/// NaN renders as "NaN" and infinities as "Infinity"/"-Infinity"
/// whatever the precision. Negative zero prints as positive zero.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY.to_string()
        } else {
            format!("-{}", INFINITY)
        };
    }

    let exact = format!("{:.*}", EXACT_DIGITS.max(precision + 1), value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .collect();
    let mut int_len = int_part.len();
    let round_up = frac_part
        .as_bytes()
        .get(precision)
        .is_some_and(|d| *d >= b'5');
    if round_up && increment(&mut digits) {
        digits.insert(0, b'1');
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| char::from(d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| char::from(d)));
    }
    out
}

/// Add one unit in the last place. True when the carry overflows.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("3.5"), 3.5);
        assert_eq!(parse_number("-7.25"), -7.25);
        assert_eq!(parse_number("+8"), 8.0);
    }

    #[test]
    fn parses_partial_mantissas() {
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
    }

    #[test]
    fn parses_exponents() {
        assert_eq!(parse_number("-1e2"), -100.0);
        assert_eq!(parse_number("2.5E-1"), 0.25);
        // Dangling exponent is ignored, like trailing text.
        assert_eq!(parse_number("3e"), 3.0);
        assert_eq!(parse_number("3e+"), 3.0);
    }

    #[test]
    fn skips_leading_whitespace() {
        assert_eq!(parse_number("  3.5"), 3.5);
        assert_eq!(parse_number("\t10"), 10.0);
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_number("12kg"), 12.0);
        assert_eq!(parse_number("1.5.6"), 1.5);
        assert_eq!(parse_number("7 8"), 7.0);
    }

    #[test]
    fn non_numeric_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("").is_nan());
        assert!(parse_number("   ").is_nan());
        assert!(parse_number("kg12").is_nan());
        assert!(parse_number("nan").is_nan());
    }

    #[test]
    fn parses_infinity_keyword() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_number("+Infinityx"), f64::INFINITY);
        assert!(parse_number("infinity").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn formats_to_precision() {
        assert_eq!(format_fixed(2.20462, 2), "2.20");
        assert_eq!(format_fixed(4.40924, 2), "4.41");
        assert_eq!(format_fixed(32.0, 1), "32.0");
        assert_eq!(format_fixed(1.0, 0), "1");
    }

    #[test]
    fn formats_nan_regardless_of_precision() {
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::NAN, 0), "NaN");
    }

    #[test]
    fn formats_infinities() {
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 1), "-Infinity");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_fixed(-0.0, 1), "0.0");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_fixed(34.25, 1), "34.3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(0.5, 0), "1");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 1.005 and 2.675 are stored slightly below the tie.
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(2.675, 2), "2.67");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(99.96, 1), "100.0");
        assert_eq!(format_fixed(-999.995, 2), "-1000.00");
    }

    #[test]
    fn small_negatives_keep_their_sign() {
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn tiny_and_large_values_format_fully() {
        assert_eq!(format_fixed(5e-324, 2), "0.00");
        assert_eq!(format_fixed(1e20, 1), "100000000000000000000.0");
    }

    proptest! {
        #[test]
        fn display_text_parses_back_exactly(x in proptest::num::f64::NORMAL) {
            prop_assert_eq!(parse_number(&x.to_string()), x);
        }

        #[test]
        fn fixed_text_parses_back_within_half_a_unit(
            x in -1.0e6f64..1.0e6,
            precision in 0usize..6,
        ) {
            let text = format_fixed(x, precision);
            let half_unit = 0.5 * 10f64.powi(-(precision as i32));
            let slack = 1e-9 * x.abs().max(1.0);
            prop_assert!(
                (parse_number(&text) - x).abs() <= half_unit + slack,
                "{} at {} decimals printed as {}", x, precision, text
            );
        }
    }
}
