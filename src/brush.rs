use egui::Color32;
use std::ops::RangeInclusive;

/// The fixed swatches offered by the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Black,
    Red,
    Blue,
    Green,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
    ];

    pub fn color(self) -> Color32 {
        match self {
            PaletteColor::Black => Color32::BLACK,
            PaletteColor::Red => Color32::RED,
            PaletteColor::Blue => Color32::BLUE,
            PaletteColor::Green => Color32::GREEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Red => "Red",
            PaletteColor::Blue => "Blue",
            PaletteColor::Green => "Green",
        }
    }
}

impl From<PaletteColor> for Color32 {
    fn from(color: PaletteColor) -> Self {
        color.color()
    }
}

/// Color and width applied to strokes begun from now on.
///
/// Strokes copy this by value when they start, so later changes never
/// reach a stroke that already exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    color: Color32,
    width: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: Self::DEFAULT_WIDTH,
        }
    }
}

impl BrushConfig {
    pub const WIDTH_RANGE: RangeInclusive<f32> = 5.0..=50.0;
    pub const DEFAULT_WIDTH: f32 = 10.0;

    pub fn new(color: Color32, width: f32) -> Self {
        let mut brush = Self {
            color,
            width: Self::DEFAULT_WIDTH,
        };
        brush.set_width(width);
        brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_color(&mut self, color: impl Into<Color32>) {
        self.color = color.into();
    }

    /// Clamps into [`Self::WIDTH_RANGE`]; non-finite widths are ignored.
    pub fn set_width(&mut self, width: f32) {
        if !width.is_finite() {
            log::warn!("Ignoring non-finite brush width {}", width);
            return;
        }
        let clamped = width.clamp(*Self::WIDTH_RANGE.start(), *Self::WIDTH_RANGE.end());
        if clamped != width {
            log::debug!("Brush width {} clamped to {}", width, clamped);
        }
        self.width = clamped;
    }
}
