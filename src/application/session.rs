use super::caret::EditKind;
use super::currency_field::CurrencyField;
use super::masked_field::MaskedField;
use crate::domain::ports::TextInput;
use crate::infrastructure::in_memory::InMemoryTextInput;
use crate::infrastructure::locale::LocaleCurrencyFormatter;
use serde::{Deserialize, Serialize};

/// One recorded keystroke in an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditEvent {
    pub event: EditKind,
    /// Full field text after an `input` event; ignored otherwise.
    #[serde(default)]
    pub text: Option<String>,
}

impl EditEvent {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            event: EditKind::Input,
            text: Some(text.into()),
        }
    }

    pub fn backspace() -> Self {
        Self {
            event: EditKind::Backspace,
            text: None,
        }
    }

    pub fn focus() -> Self {
        Self {
            event: EditKind::Focus,
            text: None,
        }
    }
}

/// Snapshot of a field after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub step: usize,
    pub event: EditKind,
    pub display: String,
    pub value: String,
    pub caret: usize,
}

/// A headless field that replays edit scripts.
pub enum FieldSession {
    Masked(MaskedField<InMemoryTextInput>),
    Currency(CurrencyField<InMemoryTextInput, LocaleCurrencyFormatter>),
}

impl FieldSession {
    /// Handles one event and reports the resulting state.
    pub fn apply(&mut self, step: usize, event: &EditEvent) -> FieldState {
        let text = event.text.as_deref().unwrap_or_default();
        let caret = match (&mut *self, event.event) {
            (FieldSession::Masked(field), EditKind::Input) => field.handle_input(text),
            (FieldSession::Masked(field), EditKind::Backspace) => field.handle_backspace(),
            (FieldSession::Masked(field), EditKind::Focus) => field.handle_focus(),
            (FieldSession::Currency(field), EditKind::Input) => field.handle_input(text),
            (FieldSession::Currency(field), EditKind::Backspace) => field.handle_backspace(),
            (FieldSession::Currency(field), EditKind::Focus) => field.handle_focus(),
        };
        self.snapshot(step, event.event, caret)
    }

    /// Replays `events` in order, numbering steps from 1.
    pub fn replay<'e>(&mut self, events: impl IntoIterator<Item = &'e EditEvent>) -> Vec<FieldState> {
        events
            .into_iter()
            .enumerate()
            .map(|(i, event)| self.apply(i + 1, event))
            .collect()
    }

    pub fn display(&self) -> &str {
        match self {
            FieldSession::Masked(field) => field.display(),
            FieldSession::Currency(field) => field.display(),
        }
    }

    /// The value the host would receive: the masked string, or cents.
    pub fn value(&self) -> String {
        match self {
            FieldSession::Masked(field) => field.value().to_string(),
            FieldSession::Currency(field) => field.amount().to_string(),
        }
    }

    pub fn input(&self) -> &InMemoryTextInput {
        match self {
            FieldSession::Masked(field) => field.input(),
            FieldSession::Currency(field) => field.input(),
        }
    }

    fn snapshot(&self, step: usize, event: EditKind, caret: usize) -> FieldState {
        debug_assert_eq!(self.input().caret(), caret);
        FieldState {
            step,
            event,
            display: self.display().to_string(),
            value: self.value(),
            caret,
        }
    }
}
