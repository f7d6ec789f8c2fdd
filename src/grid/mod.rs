//! Grid sizing module orchestrator following the RSB module specification.
//!
//! Downstream crates and the demo import sizing types from here while the
//! calculator lives in the private `core` module and the per-pass flow
//! solver lives in `flow`.

mod core;
pub mod flow;

pub use core::{
    CellSize, GridParams, GridParamsConfig, HEIGHT_CYCLE, LINE_SPACING, SECTION_VERTICAL_INSET,
    cell_height, height_ratio,
};
pub use flow::{CellFrame, FlowLayout};
