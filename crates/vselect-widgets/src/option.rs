//! Options shown by the list and select widgets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Label key used when the host does not supply one.
pub const DEFAULT_LABEL_KEY: &str = "label";

/// Something that can appear as a row in an option list.
///
/// Options expose named text fields; the host picks which one is the label
/// through a `label_key`. Identity is decided by `PartialEq` on the
/// implementing type, never by position.
pub trait ListOption {
    /// Text of the named field, if the option has it.
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Disabled options cannot be focused or selected.
    fn is_disabled(&self) -> bool {
        false
    }
}

/// Custom row text renderer: `(option, label_key) -> text`.
pub type OptionRenderer<T> = dyn Fn(&T, &str) -> String + Send + Sync;

/// Default row text: the `label_key` field, or an empty string when the
/// option has no such field.
pub fn label_of<T: ListOption + ?Sized>(option: &T, label_key: &str) -> String {
    option
        .field(label_key)
        .map(Cow::into_owned)
        .unwrap_or_default()
}

/// A selectable option with a value, a label and optional extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Additional named fields, reachable through a custom label key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            fields: BTreeMap::new(),
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    /// Set disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach an extra named field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl ListOption for SelectOption {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "value" => Some(Cow::Borrowed(&self.value)),
            "label" => Some(Cow::Borrowed(&self.label)),
            _ => self.fields.get(key).map(|v| Cow::Borrowed(v.as_str())),
        }
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// JSON objects as options: fields are looked up by key, scalars are
/// rendered as text, and `"disabled": true` disables the row.
impl ListOption for Value {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn is_disabled(&self) -> bool {
        self.get("disabled")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
