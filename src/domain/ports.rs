use rust_decimal::Decimal;

/// The host's single-line text input primitive.
///
/// Caret offsets are character offsets into the current text, not byte offsets.
pub trait TextInput {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn caret(&self) -> usize;
    fn set_caret(&mut self, offset: usize);
}

/// Locale-aware currency rendering, equivalent to ICU currency formatting.
pub trait CurrencyFormatter {
    /// Renders an amount in major units with exactly two fraction digits.
    fn format(&self, amount: Decimal) -> String;

    /// The character separating major and minor units in `format` output.
    fn decimal_separator(&self) -> char;
}
