use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Display conventions for rendering numbers and fiat amounts.
///
/// The defaults match US conventions (`1,234.56`, `$`). Frontends serving
/// other locales construct their own policy instead of relying on a baked-in
/// locale assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatPolicy {
    /// Separator inserted between three-digit groups of the integer part.
    pub group_separator: char,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
    /// Symbol prefixed to fiat amounts.
    pub currency_symbol: String,
    /// Fractional digits rendered for fiat amounts.
    pub currency_decimals: u8,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        FormatPolicy {
            group_separator: ',',
            decimal_separator: '.',
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl FormatPolicy {
    /// Builds a policy, rejecting configurations that would produce
    /// ambiguous output.
    pub fn new(
        group_separator: char,
        decimal_separator: char,
        currency_symbol: impl Into<String>,
        currency_decimals: u8,
    ) -> Result<Self, FormatError> {
        if group_separator == decimal_separator {
            return Err(FormatError::InvalidPolicy(format!(
                "group and decimal separators are both '{group_separator}'"
            )));
        }
        if group_separator.is_ascii_digit() || decimal_separator.is_ascii_digit() {
            return Err(FormatError::InvalidPolicy(
                "separators must not be digits".into(),
            ));
        }
        Ok(FormatPolicy {
            group_separator,
            decimal_separator,
            currency_symbol: currency_symbol.into(),
            currency_decimals,
        })
    }

    /// Inserts the group separator into a run of ASCII digits.
    ///
    /// The input must be the bare integer part: no sign, no decimal point.
    pub fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}
