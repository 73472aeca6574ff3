use super::mask::extract_digits;
use super::ports::CurrencyFormatter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative money amount in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct CurrencyAmount(u64);

impl CurrencyAmount {
    pub const ZERO: Self = Self(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// The amount in major units, always with a scale of 2.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Renders the amount through a locale formatter.
    pub fn format_with<F: CurrencyFormatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.format(self.to_decimal())
    }

    /// Rebuilds an amount from the full text of an edited currency field.
    ///
    /// Every digit in the text is kept and the resulting run is read as cents,
    /// so typing after a formatted amount shifts it left like a cash register.
    /// Text with no digits, or a run too long for `u64`, yields zero.
    pub fn parse_edit(edited: &str) -> Self {
        let digits = extract_digits(edited);
        match digits.as_str().parse::<u64>() {
            Ok(cents) => Self(cents),
            Err(e) => {
                if !digits.is_empty() {
                    tracing::warn!(digits = %digits, error = %e, "currency edit out of range, resetting to zero");
                }
                Self::ZERO
            }
        }
    }
}

impl From<u64> for CurrencyAmount {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl From<CurrencyAmount> for Decimal {
    fn from(amount: CurrencyAmount) -> Self {
        amount.to_decimal()
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caret placement for a focused currency field: one position before the
/// decimal separator, or 0 when the separator is missing or leads the text.
pub fn focus_caret(display: &str, decimal_separator: char) -> usize {
    display
        .chars()
        .position(|c| c == decimal_separator)
        .map_or(0, |index| index.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_decimal_splits_major_and_minor() {
        assert_eq!(CurrencyAmount::from_cents(12345).to_decimal(), dec!(123.45));
        assert_eq!(CurrencyAmount::ZERO.to_decimal(), dec!(0.00));
        assert_eq!(CurrencyAmount::from_cents(7).to_decimal().scale(), 2);
    }

    #[test]
    fn test_parse_edit_reads_digits_as_cents() {
        assert_eq!(CurrencyAmount::parse_edit("R$ 123,45").cents(), 12345);
        assert_eq!(CurrencyAmount::parse_edit("R$ 1.234,56").cents(), 123456);
    }

    #[test]
    fn test_parse_edit_appended_digit_shifts_left() {
        // "R$ 1,23" with a 4 typed at the end
        assert_eq!(CurrencyAmount::parse_edit("R$ 1,234").cents(), 1234);
    }

    #[test]
    fn test_parse_edit_leading_zeros() {
        assert_eq!(CurrencyAmount::parse_edit("R$ 0,05").cents(), 5);
        assert_eq!(CurrencyAmount::parse_edit("R$ 0,00").cents(), 0);
    }

    #[test]
    fn test_parse_edit_without_digits_is_zero() {
        assert_eq!(CurrencyAmount::parse_edit(""), CurrencyAmount::ZERO);
        assert_eq!(CurrencyAmount::parse_edit("abc"), CurrencyAmount::ZERO);
        assert_eq!(CurrencyAmount::parse_edit("R$ ,"), CurrencyAmount::ZERO);
    }

    #[test]
    fn test_parse_edit_overflow_is_zero() {
        assert_eq!(
            CurrencyAmount::parse_edit("99999999999999999999999"),
            CurrencyAmount::ZERO
        );
    }

    #[test]
    fn test_focus_caret_before_separator() {
        assert_eq!(focus_caret("R$ 123,45", ','), 5);
        assert_eq!(focus_caret("$1,234.56", '.'), 5);
    }

    #[test]
    fn test_focus_caret_clamps_to_zero() {
        assert_eq!(focus_caret("R$ 123", ','), 0);
        assert_eq!(focus_caret(",45", ','), 0);
        assert_eq!(focus_caret("", ','), 0);
    }

    #[test]
    fn test_amount_serializes_as_cents() {
        let json = serde_json::to_string(&CurrencyAmount::from_cents(250)).unwrap();
        assert_eq!(json, "250");
        let amount: CurrencyAmount = serde_json::from_str("1999").unwrap();
        assert_eq!(amount.cents(), 1999);
    }
}
