//! Testing harness for vselect widgets.
//!
//! [`Harness`] owns a root widget, feeds it synthetic pointer, wheel and
//! keyboard input, collects the messages it returns and records what it
//! paints:
//!
//! ```
//! use vselect_test::Harness;
//! use vselect_widgets::{Select, SelectOption};
//!
//! let select = Select::new(vec![SelectOption::simple("xen-01")]).with_test_id("hosts");
//! let mut harness = Harness::new(select);
//! harness.assert_exists("[data-testid='hosts']").assert_painted("Select...");
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError};
