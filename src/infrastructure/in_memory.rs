use crate::domain::ports::TextInput;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Standard text-field attributes forwarded untouched to the input primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAttributes {
    pub id: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
}

#[derive(Debug, Default)]
struct InputState {
    text: String,
    caret: usize,
    caret_writes: usize,
}

/// A headless single-line text input.
///
/// Clones share the same underlying state, so a host can keep one handle
/// while a field's controller owns another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTextInput {
    state: Rc<RefCell<InputState>>,
    attributes: FieldAttributes,
}

impl InMemoryTextInput {
    /// Creates a new, empty input with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: FieldAttributes) -> Self {
        Self {
            state: Rc::default(),
            attributes,
        }
    }

    pub fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }

    /// How many times the caret has been written since creation.
    pub fn caret_writes(&self) -> usize {
        self.state.borrow().caret_writes
    }
}

impl TextInput for InMemoryTextInput {
    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_text(&mut self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text.clear();
        state.text.push_str(text);
        let len = state.text.chars().count();
        state.caret = state.caret.min(len);
    }

    fn caret(&self) -> usize {
        self.state.borrow().caret
    }

    fn set_caret(&mut self, offset: usize) {
        let mut state = self.state.borrow_mut();
        state.caret = offset.min(state.text.chars().count());
        state.caret_writes += 1;
    }
}
