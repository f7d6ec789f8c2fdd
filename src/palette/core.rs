use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::style::Color;

use crate::error::{GridError, Result};

/// Fixed, ordered set of colors cells draw their backgrounds from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The stock nine-color palette used by the demo grid.
    pub fn standard() -> Self {
        Self {
            colors: vec![
                Color::Black,
                Color::Blue,
                Color::Rgb { r: 139, g: 69, b: 19 },
                Color::Cyan,
                Color::Green,
                Color::Rgb { r: 255, g: 165, b: 0 },
                Color::Red,
                Color::Rgb { r: 128, g: 0, b: 128 },
                Color::Yellow,
            ],
        }
    }

    /// Build a custom palette. An empty color list is rejected so pickers
    /// always have something to choose from.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `slot`, wrapping past the end of the palette.
    pub fn color_at(&self, slot: usize) -> Color {
        self.colors[slot % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Source of per-cell color choices.
///
/// Implementations are free to be random; callers inject one where a color
/// is needed, keeping the side effect out of deterministic code.
pub trait ColorPicker {
    fn pick(&mut self, palette: &Palette) -> Color;
}

/// SplitMix64-backed picker: uniform over the palette, reproducible for a
/// fixed seed.
#[derive(Debug, Clone)]
pub struct SplitMixPicker {
    state: u64,
}

impl SplitMixPicker {
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Picker seeded from the wall clock.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x4d59_5df4_d0f3_3173);
        Self::seeded(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl ColorPicker for SplitMixPicker {
    fn pick(&mut self, palette: &Palette) -> Color {
        let slot = (self.next_u64() % palette.len() as u64) as usize;
        palette.color_at(slot)
    }
}
