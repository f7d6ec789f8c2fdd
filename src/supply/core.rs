use crossterm::style::Color;

use crate::palette::{ColorPicker, Palette};

/// Corner rounding applied to every cell background.
pub const CELL_CORNER_RADIUS: f32 = 5.0;

/// Display attributes for a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAppearance {
    pub background: Color,
    pub corner_radius: f32,
}

/// Data supplier backing the grid: how many cells there are and what each
/// one looks like. Geometry comes from the solver; this side supplies the
/// cosmetics.
pub struct CellSupply {
    count: usize,
    palette: Palette,
    picker: Box<dyn ColorPicker>,
}

impl CellSupply {
    pub fn new(count: usize, palette: Palette, picker: impl ColorPicker + 'static) -> Self {
        Self {
            count,
            palette,
            picker: Box::new(picker),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Appearance for the cell at `index`. The background is drawn fresh
    /// from the picker on every call and does not depend on position.
    pub fn appearance(&mut self, _index: usize) -> CellAppearance {
        CellAppearance {
            background: self.picker.pick(&self.palette),
            corner_radius: CELL_CORNER_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SplitMixPicker;

    #[test]
    fn supply_reports_count() {
        let supply = CellSupply::new(31, Palette::standard(), SplitMixPicker::seeded(42));
        assert_eq!(supply.count(), 31);
    }

    #[test]
    fn appearance_uses_palette_colors_and_fixed_radius() {
        let mut supply = CellSupply::new(31, Palette::standard(), SplitMixPicker::seeded(42));

        for index in 0..supply.count() {
            let appearance = supply.appearance(index);
            assert!(supply.palette().colors().contains(&appearance.background));
            assert_eq!(appearance.corner_radius, CELL_CORNER_RADIUS);
        }
    }

    #[test]
    fn appearance_matches_seeded_picker_sequence() {
        let palette = Palette::standard();
        let mut reference = SplitMixPicker::seeded(9);
        let mut supply = CellSupply::new(4, palette.clone(), SplitMixPicker::seeded(9));

        for index in 0..4 {
            assert_eq!(supply.appearance(index).background, reference.pick(&palette));
        }
    }
}
