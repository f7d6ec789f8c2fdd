//! Palette module orchestrator following the RSB module specification.
//!
//! Color choice is a side effect, so it lives behind the [`ColorPicker`]
//! trait and never touches the geometry path.

mod core;

pub use core::{ColorPicker, Palette, SplitMixPicker};
