//! Widget configuration: defaults, validation, and YAML/TOML loading.
//!
//! Every struct uses `#[serde(default)]`, so a file only needs the keys it
//! changes:
//!
//! ```
//! use vselect_widgets::SelectConfig;
//!
//! let config = SelectConfig::from_yaml("list:\n  max_height: 320\n").unwrap();
//! assert_eq!(config.list.max_height, 320.0);
//! assert_eq!(config.list.option_height, 40.0);
//! ```

use crate::error::ConfigError;
use crate::option::DEFAULT_LABEL_KEY;
use serde::{Deserialize, Serialize};
use vselect_core::{Color, DEFAULT_OVERSCAN};

/// Sizing of the virtualized option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionListConfig {
    /// Upper bound for the menu height in pixels
    pub max_height: f32,
    /// Height of every row in pixels
    pub option_height: f32,
    /// Rows rendered past the viewport edge (at least one)
    pub overscan: usize,
}

impl Default for OptionListConfig {
    fn default() -> Self {
        Self {
            max_height: 200.0,
            option_height: 40.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl OptionListConfig {
    /// Set the maximum menu height (negative values become zero).
    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = height.max(0.0);
        self
    }

    /// Set the row height (floored at one pixel).
    #[must_use]
    pub fn option_height(mut self, height: f32) -> Self {
        self.option_height = height.max(1.0);
        self
    }

    /// Set the overscan (floored at one row).
    #[must_use]
    pub fn overscan(mut self, rows: usize) -> Self {
        self.overscan = rows.max(1);
        self
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.option_height.is_finite() || self.option_height <= 0.0 {
            return Err(ConfigError::invalid(
                "list.option_height",
                format!("must be a positive number, got {}", self.option_height),
            ));
        }
        if !self.max_height.is_finite() || self.max_height < 0.0 {
            return Err(ConfigError::invalid(
                "list.max_height",
                format!("must be zero or more, got {}", self.max_height),
            ));
        }
        if self.overscan == 0 {
            return Err(ConfigError::invalid("list.overscan", "must be at least 1"));
        }
        Ok(())
    }
}

/// Resolved row colors used when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowColors {
    /// Menu and row background
    pub background: Color,
    /// Background of the focused row
    pub focused_background: Color,
    /// Enabled row text
    pub text: Color,
    /// Disabled row text
    pub disabled_text: Color,
    /// Placeholder and hint text
    pub placeholder: Color,
    /// Border around header and menu
    pub border: Color,
}

impl Default for RowColors {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            focused_background: Color::rgb(0.92, 0.95, 1.0),
            text: Color::rgb(0.2, 0.2, 0.2),
            disabled_text: Color::rgb(0.8, 0.8, 0.8),
            placeholder: Color::rgb(0.67, 0.67, 0.67),
            border: Color::rgb(0.8, 0.8, 0.8),
        }
    }
}

/// Row colors as hex strings, the way they appear in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Menu and row background
    pub background: String,
    /// Background of the focused row
    pub focused_background: String,
    /// Enabled row text
    pub text: String,
    /// Disabled row text
    pub disabled_text: String,
    /// Placeholder and hint text
    pub placeholder: String,
    /// Border around header and menu
    pub border: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let colors = RowColors::default();
        Self {
            background: colors.background.to_hex(),
            focused_background: colors.focused_background.to_hex(),
            text: colors.text.to_hex(),
            disabled_text: colors.disabled_text.to_hex(),
            placeholder: colors.placeholder.to_hex(),
            border: colors.border.to_hex(),
        }
    }
}

impl PaletteConfig {
    /// Parse every color.
    pub fn resolve(&self) -> Result<RowColors, ConfigError> {
        let parse = |field: &'static str, hex: &str| {
            Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(RowColors {
            background: parse("palette.background", &self.background)?,
            focused_background: parse("palette.focused_background", &self.focused_background)?,
            text: parse("palette.text", &self.text)?,
            disabled_text: parse("palette.disabled_text", &self.disabled_text)?,
            placeholder: parse("palette.placeholder", &self.placeholder)?,
            border: parse("palette.border", &self.border)?,
        })
    }
}

/// Configuration of the select control and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Menu sizing
    pub list: OptionListConfig,
    /// Option field rendered as the row label
    pub label_key: String,
    /// Header text when nothing is selected
    pub placeholder: String,
    /// Menu text when the search matches nothing
    pub no_results_text: String,
    /// Whether typing filters the options
    pub searchable: bool,
    /// Case-insensitive search
    pub ignore_case: bool,
    /// Minimum header width in pixels
    pub min_width: f32,
    /// Colors
    pub palette: PaletteConfig,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            list: OptionListConfig::default(),
            label_key: DEFAULT_LABEL_KEY.to_string(),
            placeholder: "Select...".to_string(),
            no_results_text: "No results found".to_string(),
            searchable: true,
            ignore_case: true,
            min_width: 160.0,
            palette: PaletteConfig::default(),
        }
    }
}

impl SelectConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.list.validate()?;
        if self.label_key.is_empty() {
            return Err(ConfigError::invalid("label_key", "must not be empty"));
        }
        if !self.min_width.is_finite() || self.min_width < 0.0 {
            return Err(ConfigError::invalid(
                "min_width",
                format!("must be zero or more, got {}", self.min_width),
            ));
        }
        self.palette.resolve().map(|_| ())
    }
}
