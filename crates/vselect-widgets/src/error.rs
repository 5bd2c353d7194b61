//! Error types for widget configuration.

use thiserror::Error;
use vselect_core::ColorParseError;

/// Errors raised while loading or validating widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color field is not a valid hex color
    #[error("invalid color for `{field}`: {source}")]
    Color {
        /// Field name
        field: &'static str,
        /// Underlying parse error
        source: ColorParseError,
    },

    /// A field holds a value outside its allowed range
    #[error("invalid value for `{field}`: {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
