use crate::application::currency_field::CurrencyField;
use crate::application::masked_field::MaskedField;
use crate::application::session::FieldSession;
use crate::domain::currency::CurrencyAmount;
use crate::domain::mask::{DEFAULT_PLACEHOLDER, MaskTemplate};
use crate::error::{FieldError, Result};
use crate::infrastructure::in_memory::{FieldAttributes, InMemoryTextInput};
use crate::infrastructure::locale::{Locale, LocaleCurrencyFormatter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Mask,
    Currency,
}

/// Initial field value as written in a config: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialValue {
    Cents(u64),
    Text(String),
}

impl InitialValue {
    /// The value as text, for mounting a masked field.
    pub fn as_text(&self) -> String {
        match self {
            InitialValue::Cents(cents) => cents.to_string(),
            InitialValue::Text(text) => text.clone(),
        }
    }

    /// The value as cents, for mounting a currency field. An empty string is zero.
    pub fn cents(&self) -> Result<u64> {
        match self {
            InitialValue::Cents(cents) => Ok(*cents),
            InitialValue::Text(text) if text.is_empty() => Ok(0),
            InitialValue::Text(text) => text.parse::<u64>().map_err(|e| {
                FieldError::ConfigError(format!("invalid initial cents {text:?}: {e}"))
            }),
        }
    }
}

/// Everything needed to mount a field, as read from a JSON file.
///
/// `value` is the masked string for mask fields. Currency fields take cents,
/// either as a JSON integer or as a string of digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub kind: FieldKind,
    #[serde(default)]
    pub mask: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder_char: char,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub value: Option<InitialValue>,
    #[serde(default)]
    pub attributes: FieldAttributes,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl FieldConfig {
    pub fn mask(mask: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Mask,
            mask: Some(mask.into()),
            placeholder_char: DEFAULT_PLACEHOLDER,
            locale: Locale::default(),
            value: None,
            attributes: FieldAttributes::default(),
        }
    }

    pub fn currency(locale: Locale) -> Self {
        Self {
            kind: FieldKind::Currency,
            mask: None,
            placeholder_char: DEFAULT_PLACEHOLDER,
            locale,
            value: None,
            attributes: FieldAttributes::default(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Mounts the configured field onto a fresh headless input.
    pub fn build(&self) -> Result<FieldSession> {
        let input = InMemoryTextInput::with_attributes(self.attributes.clone());

        match self.kind {
            FieldKind::Mask => {
                let mask = self.mask.as_deref().ok_or_else(|| {
                    FieldError::ConfigError("mask fields require a mask".to_string())
                })?;
                let template = MaskTemplate::parse(mask, self.placeholder_char);
                if template.placeholder_count() == 0 {
                    tracing::warn!(mask, placeholder = %self.placeholder_char, "mask has no placeholder slots");
                }
                let value = self.value.as_ref().map(InitialValue::as_text).unwrap_or_default();
                Ok(FieldSession::Masked(MaskedField::new(template, input, &value)))
            }
            FieldKind::Currency => {
                let cents = match &self.value {
                    Some(value) => value.cents()?,
                    None => 0,
                };
                Ok(FieldSession::Currency(CurrencyField::new(
                    LocaleCurrencyFormatter::for_locale(self.locale),
                    input,
                    CurrencyAmount::from_cents(cents),
                )))
            }
        }
    }
}
