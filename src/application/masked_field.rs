use super::caret::{CaretPolicy, CaretSyncController, EditKind};
use crate::domain::mask::{MaskTemplate, RawDigits, extract_digits};
use crate::domain::ports::TextInput;

type ChangeCallback = Box<dyn FnMut(&str)>;

/// A text field whose digits are rendered through a mask template.
///
/// The raw digit stream is the source of truth. The display string is
/// re-derived from it on every edit and the caret is parked at the end.
pub struct MaskedField<T: TextInput> {
    template: MaskTemplate,
    digits: RawDigits,
    display: String,
    caret: CaretSyncController<T>,
    on_change: Option<ChangeCallback>,
}

impl<T: TextInput> MaskedField<T> {
    /// Mounts the field onto `input`, rendering `initial_value` through the template.
    ///
    /// `initial_value` may be masked or bare digits. Mounting fires no change
    /// callback and leaves the caret alone.
    pub fn new(template: MaskTemplate, input: T, initial_value: &str) -> Self {
        let digits = extract_digits(initial_value);
        let display = template.apply(&digits);
        let mut caret = CaretSyncController::new(input, CaretPolicy::End);
        caret.mount(&display);

        Self {
            template,
            digits,
            display,
            caret,
            on_change: None,
        }
    }

    /// Registers the callback receiving the new masked value after each edit.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn raw_digits(&self) -> &RawDigits {
        &self.digits
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The masked value reported to the host.
    pub fn value(&self) -> &str {
        &self.display
    }

    pub fn input(&self) -> &T {
        self.caret.input()
    }

    /// Handles a keystroke that left `text` as the field's full content.
    pub fn handle_input(&mut self, text: &str) -> usize {
        self.commit(text, EditKind::Input)
    }

    /// Handles a backspace by dropping the last rendered character.
    ///
    /// When that character is a literal the digit stream is unchanged, so the
    /// keystroke appears to do nothing once the template re-renders. A full
    /// template ending in a literal (e.g. `99-`) therefore cannot be cleared by
    /// backspace at all; only a new `handle_input` can shorten it.
    pub fn handle_backspace(&mut self) -> usize {
        let mut shortened = self.display.clone();
        shortened.pop();
        self.commit(&shortened, EditKind::Backspace)
    }

    pub fn handle_focus(&mut self) -> usize {
        self.caret
            .compute_and_apply_caret(&self.display, EditKind::Focus)
    }

    fn commit(&mut self, text: &str, kind: EditKind) -> usize {
        self.digits = extract_digits(text);
        self.display = self.template.apply(&self.digits);
        let offset = self.caret.render(&self.display, kind);

        tracing::debug!(
            %kind,
            display = %self.display,
            digits = %self.digits,
            caret = offset,
            "masked field edit"
        );

        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.display);
        }
        offset
    }
}
