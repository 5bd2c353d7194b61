//! Attribute selectors for widget queries.
//!
//! Supports:
//! - `"[data-testid='host-select']"` - by test ID
//! - `"[aria-label='Host']"` - by accessible name
//! - `"[role='combobox']"` - by accessible role

use thiserror::Error;
use vselect_core::{AccessibleRole, Widget};

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(AccessibleRole),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is malformed or names an unknown
    /// attribute or role.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        let body = input
            .strip_prefix('[')
            .ok_or(SelectorError::ExpectedAttribute)?
            .strip_suffix(']')
            .ok_or(SelectorError::UnclosedAttribute)?;
        let (name, value) = body
            .split_once('=')
            .ok_or(SelectorError::ExpectedAttribute)?;
        let value = unquote(value.trim());

        match name.trim() {
            "data-testid" => Ok(Self::TestId(value.to_string())),
            "aria-label" => Ok(Self::Label(value.to_string())),
            "role" => parse_role(value).map(Self::Role),
            other => Err(SelectorError::UnknownAttribute(other.to_string())),
        }
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(name) => widget.accessible_name() == Some(name.as_str()),
            Self::Role(role) => widget.accessible_role() == *role,
        }
    }
}

/// Selector parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Selector is not of the form `[name='value']`
    #[error("expected an attribute selector like [data-testid='id']")]
    ExpectedAttribute,
    /// Missing `]`
    #[error("unclosed attribute selector")]
    UnclosedAttribute,
    /// Attribute the harness cannot match on
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    /// Role name with no matching [`AccessibleRole`]
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

fn unquote(value: &str) -> &str {
    ['\'', '"']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value)
}

fn parse_role(value: &str) -> Result<AccessibleRole, SelectorError> {
    match value.to_ascii_lowercase().as_str() {
        "generic" => Ok(AccessibleRole::Generic),
        "listbox" => Ok(AccessibleRole::ListBox),
        "option" => Ok(AccessibleRole::Option),
        "combobox" => Ok(AccessibleRole::ComboBox),
        _ => Err(SelectorError::UnknownRole(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_test_id() {
        assert_eq!(
            Selector::parse("[data-testid='host-select']"),
            Ok(Selector::TestId("host-select".to_string()))
        );
        assert_eq!(
            Selector::parse(r#"[data-testid="x"]"#),
            Ok(Selector::TestId("x".to_string()))
        );
        assert_eq!(
            Selector::parse("[data-testid=bare]"),
            Ok(Selector::TestId("bare".to_string()))
        );
    }

    #[test]
    fn test_parse_label_and_role() {
        assert_eq!(
            Selector::parse("[aria-label='Host']"),
            Ok(Selector::Label("Host".to_string()))
        );
        assert_eq!(
            Selector::parse("[role='ComboBox']"),
            Ok(Selector::Role(AccessibleRole::ComboBox))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("Button"),
            Err(SelectorError::ExpectedAttribute)
        );
        assert_eq!(
            Selector::parse("[data-testid='x'"),
            Err(SelectorError::UnclosedAttribute)
        );
        assert_eq!(
            Selector::parse("[class='x']"),
            Err(SelectorError::UnknownAttribute("class".to_string()))
        );
        assert_eq!(
            Selector::parse("[role='slider']"),
            Err(SelectorError::UnknownRole("slider".to_string()))
        );
    }

    proptest! {
        #[test]
        fn prop_test_id_survives_quoting(id in "[a-z0-9][a-z0-9_-]{0,23}") {
            let forms = [
                format!("[data-testid='{id}']"),
                format!("[data-testid=\"{id}\"]"),
                format!("[data-testid={id}]"),
            ];
            for quoted in forms {
                prop_assert_eq!(Selector::parse(&quoted), Ok(Selector::TestId(id.clone())));
            }
        }

        #[test]
        fn prop_unbracketed_input_is_rejected(text in "[a-z=' ]{0,16}") {
            prop_assert!(Selector::parse(&text).is_err());
        }
    }
}
