use crate::domain::currency::focus_caret;
use crate::domain::ports::TextInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What triggered a re-render of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Input,
    Backspace,
    Focus,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Input => "input",
            EditKind::Backspace => "backspace",
            EditKind::Focus => "focus",
        };
        f.write_str(name)
    }
}

/// Where the caret lands after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretPolicy {
    /// End of the display string. Used by masked fields.
    End,
    /// One position before the given decimal separator. Used by currency fields.
    BeforeDecimal(char),
}

impl CaretPolicy {
    /// Target offset for `display`, clamped to its length in chars.
    pub fn target(&self, display: &str) -> usize {
        let len = display.chars().count();
        let offset = match self {
            CaretPolicy::End => len,
            CaretPolicy::BeforeDecimal(separator) => focus_caret(display, *separator),
        };
        offset.min(len)
    }
}

/// Keeps a single text input's caret in step with its formatted display.
///
/// The controller owns the handle of the input it drives. Each edit results in
/// exactly one text replacement followed by exactly one caret write.
pub struct CaretSyncController<T: TextInput> {
    input: T,
    policy: CaretPolicy,
}

impl<T: TextInput> CaretSyncController<T> {
    pub fn new(input: T, policy: CaretPolicy) -> Self {
        Self { input, policy }
    }

    pub fn input(&self) -> &T {
        &self.input
    }

    /// Writes the initial display without touching the caret.
    pub fn mount(&mut self, display: &str) {
        self.input.set_text(display);
    }

    /// Replaces the input's text with `display`, then places the caret.
    pub fn render(&mut self, display: &str, kind: EditKind) -> usize {
        self.input.set_text(display);
        self.compute_and_apply_caret(display, kind)
    }

    /// Computes the caret for `display` and writes it to the input once.
    pub fn compute_and_apply_caret(&mut self, display: &str, kind: EditKind) -> usize {
        let offset = self.policy.target(display);
        tracing::trace!(%kind, offset, "caret write");
        self.input.set_caret(offset);
        offset
    }
}
