use std::time::Duration;

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters accumulated across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    solves: u64,
    cells_placed: u64,
    degenerate_widths: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one solved pass: how many cells it placed, and whether the
    /// computed cell width was degenerate (zero or negative).
    pub fn record_solve(&mut self, cell_count: usize, degenerate: bool) {
        self.solves = self.solves.saturating_add(1);
        self.cells_placed = self.cells_placed.saturating_add(cell_count as u64);
        if degenerate {
            self.degenerate_widths = self.degenerate_widths.saturating_add(1);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> LayoutSnapshot {
        LayoutSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            solves: self.solves,
            cells_placed: self.cells_placed,
            degenerate_widths: self.degenerate_widths,
        }
    }
}

/// Point-in-time copy of the accumulated counters.
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    pub uptime_ms: u64,
    pub solves: u64,
    pub cells_placed: u64,
    pub degenerate_widths: u64,
}

impl LayoutSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("solves".to_string(), json!(self.solves));
        map.insert("cells_placed".to_string(), json!(self.cells_placed));
        map.insert(
            "degenerate_widths".to_string(),
            json!(self.degenerate_widths),
        );
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_solve_accumulates() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_solve(31, false);
        metrics.record_solve(2, true);

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.uptime_ms, 1500);
        assert_eq!(snapshot.solves, 2);
        assert_eq!(snapshot.cells_placed, 33);
        assert_eq!(snapshot.degenerate_widths, 1);
    }

    #[test]
    fn snapshot_converts_to_log_event() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_solve(5, false);

        let event = metrics
            .snapshot(Duration::ZERO)
            .to_log_event("flowgrid::metrics");
        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields.get("solves"), Some(&json!(1)));
        assert_eq!(event.fields.get("cells_placed"), Some(&json!(5)));
    }
}
