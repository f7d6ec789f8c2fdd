use serde::{Deserialize, Serialize};

use crate::geometry::Insets;

/// Vertical inset applied above and below a grid section.
pub const SECTION_VERTICAL_INSET: f32 = 10.0;

/// Vertical gap between consecutive grid rows, independent of params.
pub const LINE_SPACING: f32 = 10.0;

/// Length of the repeating tall/short height cycle.
pub const HEIGHT_CYCLE: usize = 6;

/// Leading slots of each cycle that render tall.
const TALL_SLOTS: usize = 2;

const TALL_RATIO: f32 = 2.0 / 3.0;
const SHORT_RATIO: f32 = 1.0 / 3.0;

/// Immutable sizing inputs for a fixed-column grid.
///
/// The horizontal padding a full row consumes (edge insets plus the gaps
/// between adjacent cells) is derived once at construction and cached;
/// construction is the only write path, so the cached value cannot drift
/// from its inputs. Serde round-trips through [`GridParamsConfig`] and
/// recomputes the padding on load rather than trusting it from input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GridParamsConfig", into = "GridParamsConfig")]
pub struct GridParams {
    column_count: u16,
    left_inset: f32,
    right_inset: f32,
    cell_spacing: f32,
    derived_padding: f32,
}

impl GridParams {
    pub fn new(column_count: u16, left_inset: f32, right_inset: f32, cell_spacing: f32) -> Self {
        let gaps = f32::from(column_count.saturating_sub(1));
        Self {
            column_count,
            left_inset,
            right_inset,
            cell_spacing,
            derived_padding: left_inset + right_inset + gaps * cell_spacing,
        }
    }

    pub fn column_count(&self) -> u16 {
        self.column_count
    }

    pub fn left_inset(&self) -> f32 {
        self.left_inset
    }

    pub fn right_inset(&self) -> f32 {
        self.right_inset
    }

    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    /// Horizontal space one full row spends on insets and inter-cell gaps.
    pub fn derived_padding(&self) -> f32 {
        self.derived_padding
    }

    /// Width of a single cell inside a container `container_width` wide.
    ///
    /// Pure and deterministic. A container narrower than the derived padding
    /// yields a negative width, and a zero column count divides by `0.0`;
    /// both are defined numeric outputs, not failures. Callers defend
    /// against degenerate widths before rendering.
    pub fn cell_width(&self, container_width: f32) -> f32 {
        let available = container_width - self.derived_padding;
        available / f32::from(self.column_count)
    }

    /// Width and height for the cell at `index`.
    pub fn cell_size(&self, container_width: f32, index: usize) -> CellSize {
        let width = self.cell_width(container_width);
        CellSize {
            width,
            height: cell_height(width, index),
        }
    }

    /// Section insets: fixed vertical padding, horizontal taken from params.
    pub fn insets(&self) -> Insets {
        Insets::new(
            SECTION_VERTICAL_INSET,
            self.left_inset,
            SECTION_VERTICAL_INSET,
            self.right_inset,
        )
    }

    /// Vertical gap between rows. Fixed, regardless of params.
    pub fn line_spacing(&self) -> f32 {
        LINE_SPACING
    }

    /// Horizontal gap between adjacent cells in a row.
    pub fn interitem_spacing(&self) -> f32 {
        self.cell_spacing
    }
}

/// Plain serialized form of [`GridParams`].
///
/// Insets and spacing default to zero when omitted from config input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridParamsConfig {
    pub column_count: u16,
    #[serde(default)]
    pub left_inset: f32,
    #[serde(default)]
    pub right_inset: f32,
    #[serde(default)]
    pub cell_spacing: f32,
}

impl From<GridParamsConfig> for GridParams {
    fn from(config: GridParamsConfig) -> Self {
        Self::new(
            config.column_count,
            config.left_inset,
            config.right_inset,
            config.cell_spacing,
        )
    }
}

impl From<GridParams> for GridParamsConfig {
    fn from(params: GridParams) -> Self {
        Self {
            column_count: params.column_count,
            left_inset: params.left_inset,
            right_inset: params.right_inset,
            cell_spacing: params.cell_spacing,
        }
    }
}

/// Computed size for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

/// Height multiplier for the cell at `index`.
///
/// The first two slots of every six-cell cycle are tall (`2/3` of the
/// width), the remaining four are short (`1/3`). The cycle depends only on
/// the linear index, so it reproduces regardless of row wrapping.
pub fn height_ratio(index: usize) -> f32 {
    if index % HEIGHT_CYCLE < TALL_SLOTS {
        TALL_RATIO
    } else {
        SHORT_RATIO
    }
}

/// Height of the cell at `index`, derived from its width.
pub fn cell_height(width: f32, index: usize) -> f32 {
    width * height_ratio(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn playground_params() -> GridParams {
        GridParams::new(2, 10.0, 10.0, 10.0)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn derived_padding_sums_insets_and_gaps() {
        assert_eq!(playground_params().derived_padding(), 30.0);
        assert_eq!(GridParams::new(4, 16.0, 16.0, 8.0).derived_padding(), 56.0);
    }

    #[test]
    fn derived_padding_with_zero_columns_stays_finite() {
        let params = GridParams::new(0, 10.0, 10.0, 10.0);
        assert_eq!(params.derived_padding(), 20.0);
    }

    #[test]
    fn cell_width_divides_available_space() {
        let params = playground_params();
        assert_eq!(params.cell_width(400.0), 185.0);
    }

    #[test]
    fn cell_width_is_deterministic() {
        let params = GridParams::new(3, 12.0, 12.0, 6.0);
        assert_eq!(params.cell_width(731.5), params.cell_width(731.5));
    }

    #[test]
    fn narrow_container_yields_negative_width() {
        let params = playground_params();
        assert_eq!(params.cell_width(20.0), -5.0);
    }

    #[test]
    fn height_ratio_cycles_every_six_cells() {
        for index in 0..24 {
            assert_close(height_ratio(index), height_ratio(index + HEIGHT_CYCLE));
        }
    }

    #[test]
    fn height_ratio_two_tall_four_short() {
        assert_close(height_ratio(0), 2.0 / 3.0);
        assert_close(height_ratio(1), 2.0 / 3.0);
        assert_close(height_ratio(2), 1.0 / 3.0);
        assert_close(height_ratio(5), 1.0 / 3.0);
        assert_close(height_ratio(6), 2.0 / 3.0);
    }

    #[test]
    fn cell_height_applies_ratio() {
        assert_close(cell_height(185.0, 0), 185.0 * (2.0 / 3.0));
        assert_close(cell_height(185.0, 5), 185.0 * (1.0 / 3.0));
    }

    #[test]
    fn cell_size_combines_width_and_height() {
        let size = playground_params().cell_size(400.0, 2);
        assert_eq!(size.width, 185.0);
        assert_close(size.height, 185.0 / 3.0);
    }

    #[test]
    fn insets_fix_vertical_edges() {
        let insets = GridParams::new(2, 16.0, 9.0, 10.0).insets();
        assert_eq!(insets.top, 10.0);
        assert_eq!(insets.bottom, 10.0);
        assert_eq!(insets.left, 16.0);
        assert_eq!(insets.right, 9.0);
    }

    #[test]
    fn line_spacing_ignores_params() {
        assert_eq!(playground_params().line_spacing(), 10.0);
        assert_eq!(GridParams::new(7, 0.0, 99.0, 3.0).line_spacing(), 10.0);
    }

    #[test]
    fn interitem_spacing_passes_through() {
        assert_eq!(GridParams::new(2, 10.0, 10.0, 7.0).interitem_spacing(), 7.0);
    }

    #[test]
    fn config_round_trip_recomputes_padding() {
        let json = r#"{"column_count":2,"left_inset":10.0,"right_inset":10.0,"cell_spacing":10.0}"#;
        let params: GridParams = serde_json::from_str(json).unwrap();
        assert_eq!(params, playground_params());
        assert_eq!(params.derived_padding(), 30.0);
    }

    #[test]
    fn config_defaults_omitted_fields_to_zero() {
        let params: GridParams = serde_json::from_str(r#"{"column_count":3}"#).unwrap();
        assert_eq!(params.column_count(), 3);
        assert_eq!(params.derived_padding(), 0.0);
    }
}
