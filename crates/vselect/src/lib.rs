//! vselect: a virtualized, searchable option list for retained-mode UIs.
//!
//! Lists of any length paint only the rows inside their viewport. The
//! [`Select`] control owns options, focus, selection and search text and
//! drives a [`VirtualizedOptionList`] through per-frame props.
//!
//! ```
//! use vselect::prelude::*;
//!
//! let options: Vec<SelectOption> = (0..10_000)
//!     .map(|i| SelectOption::new(format!("vm-{i}"), format!("VM {i}")))
//!     .collect();
//! let mut select = Select::new(options);
//! select.layout(Rect::new(0.0, 0.0, 240.0, 40.0));
//! select.event(&Event::KeyDown { key: Key::Down });
//!
//! let mut canvas = RecordingCanvas::new();
//! select.paint(&mut canvas);
//! assert_eq!(canvas.texts(), vec!["Select...", "VM 0", "VM 1", "VM 2", "VM 3", "VM 4", "VM 5"]);
//! ```

pub use vselect_core::*;
pub use vselect_widgets as widgets;
pub use vselect_widgets::{
    label_of, ConfigError, ListOption, MeasureProvider, OptionListConfig, OptionListHandler,
    OptionListProps, OptionRow, RowColors, RowState, Select, SelectConfig, SelectOption,
    SelectionChanged, VirtualizedOptionList,
};

/// Common imports for hosts.
pub mod prelude {
    pub use vselect_core::{
        Canvas, Color, Constraints, Event, Key, MouseButton, Point, RecordingCanvas, Rect, Size,
        Widget,
    };
    pub use vselect_widgets::{
        label_of, ListOption, OptionListHandler, OptionListProps, Select, SelectConfig, SelectOption,
        SelectionChanged, VirtualizedOptionList,
    };
}
