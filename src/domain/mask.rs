use std::fmt;

/// Placeholder character used when a mask does not name its own.
pub const DEFAULT_PLACEHOLDER: char = '9';

/// Templates used by the registration forms.
pub mod presets {
    pub const CPF: &str = "999.999.999-99";
    pub const CNPJ: &str = "99.999.999/9999-99";
    pub const CEP: &str = "99999-999";
    pub const PHONE_LANDLINE: &str = "(99) 9999-9999";
    pub const PHONE_MOBILE: &str = "(99) 99999-9999";
    pub const DATE: &str = "99/99/9999";
}

/// A single position in a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Copied through to the display unchanged.
    Literal(char),
    /// Consumes exactly one raw digit.
    Placeholder,
}

/// The ordered digits a user has entered into a masked field.
///
/// Only ASCII digits are ever stored. The stream is not bounded by the
/// template; digits past the template's capacity are kept but not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawDigits(String);

impl RawDigits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps every ASCII digit in `text`, in order, and drops everything else.
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips every non-digit character from `text`.
pub fn extract_digits(text: &str) -> RawDigits {
    RawDigits::from_text(text)
}

/// An immutable mask such as `999.999.999-99`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    slots: Vec<Slot>,
}

impl MaskTemplate {
    /// Parses `mask`, treating every `placeholder` char as a digit slot and
    /// every other char as a literal.
    pub fn parse(mask: &str, placeholder: char) -> Self {
        let slots = mask
            .chars()
            .map(|c| {
                if c == placeholder {
                    Slot::Placeholder
                } else {
                    Slot::Literal(c)
                }
            })
            .collect();
        Self { slots }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots, which is also the longest display this template can render.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// How many digits the template can render.
    pub fn placeholder_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Placeholder))
            .count()
    }

    /// Renders `digits` through the template in one left-to-right pass.
    ///
    /// The pass stops at the first placeholder with no digit left to fill it.
    /// Literals are held back until the next placeholder is filled, so the
    /// display never ends in a separator the user has not typed past. Literals
    /// after the last placeholder are written once the template is full.
    /// Digits beyond the template's capacity are discarded.
    pub fn apply(&self, digits: &RawDigits) -> String {
        let mut remaining = digits.as_str().chars();
        let mut display = String::with_capacity(self.slots.len());
        let mut pending = String::new();

        for slot in &self.slots {
            match slot {
                Slot::Literal(c) => pending.push(*c),
                Slot::Placeholder => match remaining.next() {
                    Some(digit) => {
                        display.push_str(&pending);
                        pending.clear();
                        display.push(digit);
                    }
                    None => return display,
                },
            }
        }

        display.push_str(&pending);
        display
    }
}

impl fmt::Display for MaskTemplate {
    /// Writes the template back using the default placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Literal(c) => write!(f, "{c}")?,
                Slot::Placeholder => write!(f, "{DEFAULT_PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}
