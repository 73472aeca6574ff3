use super::caret::{CaretPolicy, CaretSyncController, EditKind};
use crate::domain::currency::CurrencyAmount;
use crate::domain::ports::{CurrencyFormatter, TextInput};

type ChangeCallback = Box<dyn FnMut(CurrencyAmount)>;

/// A money field that behaves like a cash register.
///
/// The integer amount in cents is the source of truth; the display is always
/// `formatter.format(amount / 100)`. After every edit the caret is placed just
/// before the decimal separator.
pub struct CurrencyField<T: TextInput, F: CurrencyFormatter> {
    formatter: F,
    amount: CurrencyAmount,
    display: String,
    caret: CaretSyncController<T>,
    on_change: Option<ChangeCallback>,
}

impl<T: TextInput, F: CurrencyFormatter> CurrencyField<T, F> {
    pub fn new(formatter: F, input: T, initial: CurrencyAmount) -> Self {
        let display = initial.format_with(&formatter);
        let mut caret =
            CaretSyncController::new(input, CaretPolicy::BeforeDecimal(formatter.decimal_separator()));
        caret.mount(&display);

        Self {
            formatter,
            amount: initial,
            display,
            caret,
            on_change: None,
        }
    }

    /// Registers the callback receiving the new amount after each edit.
    pub fn on_change(mut self, callback: impl FnMut(CurrencyAmount) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn amount(&self) -> CurrencyAmount {
        self.amount
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn input(&self) -> &T {
        self.caret.input()
    }

    /// Handles a keystroke that left `text` as the field's full content.
    pub fn handle_input(&mut self, text: &str) -> usize {
        self.commit(CurrencyAmount::parse_edit(text), EditKind::Input)
    }

    /// Drops the last rendered character, which removes the least significant cent digit.
    pub fn handle_backspace(&mut self) -> usize {
        let mut shortened = self.display.clone();
        shortened.pop();
        self.commit(CurrencyAmount::parse_edit(&shortened), EditKind::Backspace)
    }

    pub fn handle_focus(&mut self) -> usize {
        self.caret
            .compute_and_apply_caret(&self.display, EditKind::Focus)
    }

    fn commit(&mut self, amount: CurrencyAmount, kind: EditKind) -> usize {
        self.amount = amount;
        self.display = amount.format_with(&self.formatter);
        let offset = self.caret.render(&self.display, kind);

        tracing::debug!(
            %kind,
            display = %self.display,
            cents = amount.cents(),
            caret = offset,
            "currency field edit"
        );

        if let Some(callback) = self.on_change.as_mut() {
            callback(amount);
        }
        offset
    }
}
