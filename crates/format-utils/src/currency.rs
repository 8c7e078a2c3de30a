use crate::policy::FormatPolicy;
use crate::NumericInput;

/// Renders a fiat amount with the default US policy (`$1,234.50`).
pub fn format_usd<'a>(amount: impl Into<NumericInput<'a>>) -> String {
    format_usd_with(&FormatPolicy::default(), amount)
}

/// Renders a fiat amount under an explicit policy.
///
/// The output carries the policy's currency symbol, a digit-grouped
/// integer part, and exactly `currency_decimals` fractional digits.
/// Empty and unparseable inputs render as the zero amount. The sign
/// precedes the symbol (`-$0.50`).
pub fn format_usd_with<'a>(policy: &FormatPolicy, amount: impl Into<NumericInput<'a>>) -> String {
    let value = amount.into().resolve().unwrap_or(0.0);
    let decimals = usize::from(policy.currency_decimals);

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rendered.as_str(), ""),
    };

    let negative = value < 0.0 && rendered.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut out = String::with_capacity(rendered.len() + policy.currency_symbol.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&policy.currency_symbol);
    out.push_str(&policy.group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(policy.decimal_separator);
        out.push_str(frac_part);
    }
    out
}
