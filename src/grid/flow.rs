//! Flow solver placing a fixed-column grid of cells into a scrollable
//! content area, top to bottom.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::json;

use crate::geometry::{Rect, Size};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;

use super::core::{GridParams, LINE_SPACING, SECTION_VERTICAL_INSET, cell_height};

/// Solved frame for one cell, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellFrame {
    pub index: usize,
    pub rect: Rect,
}

/// Places every cell of a layout pass and reports total content size.
///
/// The solving math is a pure function of the params, container width, and
/// item count; the optional logger and metrics hooks observe passes without
/// feeding back into them.
pub struct FlowLayout {
    params: GridParams,
    logger: Option<Logger>,
    metrics: Option<Arc<Mutex<LayoutMetrics>>>,
}

impl FlowLayout {
    pub fn new(params: GridParams) -> Self {
        Self {
            params,
            logger: None,
            metrics: None,
        }
    }

    /// Attach a structured logger emitting one event per solved pass.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a shared metrics accumulator updated on every pass.
    pub fn with_metrics(mut self, metrics: Arc<Mutex<LayoutMetrics>>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Solve frames for `item_count` cells in a container `container_width`
    /// wide. Same inputs, same frames.
    pub fn solve(&self, container_width: f32, item_count: usize) -> Vec<CellFrame> {
        let frames = solve_frames(&self.params, container_width, item_count);
        let cell_width = self.params.cell_width(container_width);

        if let Some(metrics) = &self.metrics {
            let mut guard = metrics.lock().expect("layout metrics mutex poisoned");
            guard.record_solve(frames.len(), cell_width <= 0.0);
        }

        if let Some(logger) = &self.logger {
            let event = event_with_fields(
                LogLevel::Debug,
                "flowgrid::layout",
                "layout_solved",
                [
                    json_kv("container_width", json!(container_width)),
                    json_kv("cell_width", json!(cell_width)),
                    json_kv("cells", json!(frames.len())),
                ],
            );
            let _ = logger.log_event(event);
        }

        frames
    }

    /// Total content extent for `item_count` cells: container width by the
    /// lowest frame bottom plus the bottom inset. An empty grid still
    /// reserves the vertical insets.
    pub fn content_size(&self, container_width: f32, item_count: usize) -> Size {
        let frames = solve_frames(&self.params, container_width, item_count);
        let max_bottom = frames
            .iter()
            .map(|frame| frame.rect.bottom())
            .fold(SECTION_VERTICAL_INSET, f32::max);
        Size::new(container_width, max_bottom + SECTION_VERTICAL_INSET)
    }
}

fn solve_frames(params: &GridParams, container_width: f32, item_count: usize) -> Vec<CellFrame> {
    let columns = usize::from(params.column_count()).max(1);
    let cell_width = params.cell_width(container_width);
    let mut frames = Vec::with_capacity(item_count);

    let mut y = SECTION_VERTICAL_INSET;
    let mut row_start = 0;
    while row_start < item_count {
        let row_end = (row_start + columns).min(item_count);
        let mut row_height = 0.0f32;

        for (column, index) in (row_start..row_end).enumerate() {
            let height = cell_height(cell_width, index);
            let x = params.left_inset() + column as f32 * (cell_width + params.cell_spacing());
            frames.push(CellFrame {
                index,
                rect: Rect::new(x, y, cell_width, height),
            });
            // A degenerate row never moves the cursor backwards.
            row_height = row_height.max(height);
        }

        y += row_height;
        row_start = row_end;
        if row_start < item_count {
            y += LINE_SPACING;
        }
    }

    frames
}
