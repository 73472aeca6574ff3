use crate::domain::ports::CurrencyFormatter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Locales with a built-in currency format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

/// Table-driven currency formatting for a fixed locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    symbol: String,
    symbol_spacing: bool,
    grouping_separator: char,
    decimal_separator: char,
}

impl LocaleCurrencyFormatter {
    pub fn new(
        symbol: impl Into<String>,
        symbol_spacing: bool,
        grouping_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            symbol_spacing,
            grouping_separator,
            decimal_separator,
        }
    }

    /// Brazilian real: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self::new("R$", true, '.', ',')
    }

    /// US dollar: `$1,234.56`.
    pub fn en_us() -> Self {
        Self::new("$", false, ',', '.')
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self::pt_br(),
            Locale::EnUs => Self::en_us(),
        }
    }

    fn group(&self, integer: &str) -> String {
        let len = integer.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let magnitude = format!("{:.2}", amount.abs().round_dp(2));
        let (integer, fraction) = magnitude
            .split_once('.')
            .unwrap_or((magnitude.as_str(), "00"));

        let mut out = String::new();
        if amount.is_sign_negative() && !amount.is_zero() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.symbol_spacing {
            out.push(' ');
        }
        out.push_str(&self.group(integer));
        out.push(self.decimal_separator);
        out.push_str(fraction);
        out
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}
