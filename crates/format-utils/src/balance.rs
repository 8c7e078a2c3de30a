use crate::policy::FormatPolicy;
use crate::NumericInput;

/// Fractional digits rendered for token balances unless the caller asks
/// for a different precision.
pub const DEFAULT_BALANCE_DECIMALS: usize = 4;

/// Positive balances below this render in exponential notation; a fixed
/// rendering would collapse them to "0".
const EXPONENTIAL_THRESHOLD: f64 = 1e-4;

/// Renders a token balance with the default US policy and
/// [`DEFAULT_BALANCE_DECIMALS`] precision.
pub fn format_balance<'a>(balance: impl Into<NumericInput<'a>>) -> String {
    format_balance_with(&FormatPolicy::default(), balance, DEFAULT_BALANCE_DECIMALS)
}

/// Renders a token balance under an explicit policy.
///
/// Empty, unparseable, and zero inputs all render as `"0"`. Non-zero
/// values smaller in magnitude than `1e-4` render in exponential notation
/// with two fractional digits (`5.00e-5`). Everything else renders with up
/// to `decimals` fractional digits, trailing zeros trimmed and the integer
/// part digit-grouped.
pub fn format_balance_with<'a>(
    policy: &FormatPolicy,
    balance: impl Into<NumericInput<'a>>,
    decimals: usize,
) -> String {
    let Some(value) = balance.into().resolve() else {
        return "0".to_string();
    };
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < EXPONENTIAL_THRESHOLD {
        return format!("{value:.2e}");
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    // A negative value can still round to all zeros at low precision;
    // "-0" is not a balance.
    let negative = value < 0.0 && rendered.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut out = String::with_capacity(rendered.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&policy.group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(policy.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_empty_render_as_zero() {
        assert_eq!(format_balance(0.0), "0");
        assert_eq!(format_balance(""), "0");
        assert_eq!(format_balance("0"), "0");
        assert_eq!(format_balance("0.000"), "0");
    }

    #[test]
    fn unparseable_text_degrades_to_zero() {
        assert_eq!(format_balance("not a number"), "0");
        assert_eq!(format_balance("12abc"), "0");
    }

    #[test]
    fn integers_render_without_decimals() {
        assert_eq!(format_balance(5.0), "5");
        assert_eq!(format_balance("5"), "5");
        assert_eq!(format_balance(12345.0), "12,345");
    }

    #[test]
    fn small_values_render_exponentially() {
        assert_eq!(format_balance(0.00005), "5.00e-5");
        assert_eq!(format_balance(0.000012), "1.20e-5");
        assert_eq!(format_balance(-0.00005), "-5.00e-5");
    }

    #[test]
    fn threshold_value_stays_fixed_notation() {
        assert_eq!(format_balance(0.0001), "0.0001");
    }

    #[test]
    fn fractional_digits_capped_and_trimmed() {
        assert_eq!(format_balance(1.5), "1.5");
        assert_eq!(format_balance(1.23456789), "1.2346");
        assert_eq!(format_balance(0.1), "0.1");
        assert_eq!(format_balance_with(&FormatPolicy::default(), 1.23456789, 2), "1.23");
    }

    #[test]
    fn integer_part_is_grouped() {
        assert_eq!(format_balance(1234567.5), "1,234,567.5");
        assert_eq!(format_balance("9876543.21"), "9,876,543.21");
    }

    #[test]
    fn negative_balances_keep_their_sign() {
        assert_eq!(format_balance(-1234.5), "-1,234.5");
    }

    #[test]
    fn negative_rounding_to_zero_drops_sign() {
        assert_eq!(
            format_balance_with(&FormatPolicy::default(), -0.0002, 0),
            "0"
        );
    }

    #[test]
    fn custom_policy_separators_apply() {
        let policy = FormatPolicy::new('.', ',', "\u{20ac}", 2).unwrap();
        assert_eq!(format_balance_with(&policy, 1234567.5, 4), "1.234.567,5");
    }
}
