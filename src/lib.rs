//! Experimental pilot implementation of the FlowGrid geometry engine MVP.
//!
//! The crate computes deterministic per-cell sizing for a fixed-column grid
//! bound to a scrollable container: cell widths from the available container
//! width, cell heights from a repeating tall/short aspect cycle, and full
//! frames for every cell in a layout pass. The modules follow the RSB
//! `MODULE_SPEC` pattern so the pilot can graduate into a production crate
//! without major surgery.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod metrics;
pub mod palette;
pub mod registry;
pub mod supply;

pub use error::{GridError, Result};
pub use geometry::{Insets, Rect, Size};
pub use grid::{
    CellFrame, CellSize, FlowLayout, GridParams, GridParamsConfig, HEIGHT_CYCLE, LINE_SPACING,
    SECTION_VERTICAL_INSET, cell_height, height_ratio,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, event_with_fields, json_kv,
};
pub use metrics::{LayoutMetrics, LayoutSnapshot};
pub use palette::{ColorPicker, Palette, SplitMixPicker};
pub use registry::FrameRegistry;
pub use supply::{CELL_CORNER_RADIUS, CellAppearance, CellSupply};
