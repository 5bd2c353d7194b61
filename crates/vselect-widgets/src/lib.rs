//! Option list and select widgets for vselect.
//!
//! - [`VirtualizedOptionList`]: fixed-row-height list that paints only its
//!   visible window and reports hover/click through [`OptionListHandler`]
//! - [`Select`]: searchable dropdown that owns options, focus and selection
//!   and drives the list
//! - [`SelectConfig`]: serde-backed configuration loadable from YAML or TOML

pub mod config;
mod error;
mod measure;
pub mod option;
pub mod option_list;
pub mod select;

pub use config::{OptionListConfig, PaletteConfig, RowColors, SelectConfig};
pub use error::ConfigError;
pub use measure::MeasureProvider;
pub use option::{label_of, ListOption, OptionRenderer, SelectOption, DEFAULT_LABEL_KEY};
pub use option_list::{
    OptionListHandler, OptionListProps, OptionRow, RowState, VirtualizedOptionList,
};
pub use select::{Select, SelectionChanged};
