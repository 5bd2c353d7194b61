//! Core types and traits for vselect widgets.
//!
//! This crate provides the foundations the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Colors: [`Color`] with hex parsing
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Canvas`] traits, plus a [`RecordingCanvas`]
//! - Fixed-row-height virtualization: [`visible_window`], [`FixedRowScroll`]

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod virtualization;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use virtualization::{
    visible_window, FixedRowScroll, ScrollAlign, VisibleWindow, DEFAULT_OVERSCAN,
};
pub use widget::{
    AccessibleRole, Canvas, LayoutResult, TextStyle, TypeId, Widget,
};
