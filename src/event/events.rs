use crate::brush::BrushConfig;

/// Changes announced by the [`crate::StrokeStore`] after each mutation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEvent {
    /// A new stroke was appended at `index`
    StrokeBegun { index: usize },
    /// The stroke at `index` now has `point_count` points
    StrokeExtended { index: usize, point_count: usize },
    /// The last stroke was removed, leaving `remaining` strokes
    Undone { remaining: usize },
    /// Every stroke was removed
    Cleared { removed: usize },
    BrushChanged(BrushConfig),
}

impl DrawingEvent {
    /// Whether the event changes what the canvas shows
    pub fn affects_canvas(&self) -> bool {
        !matches!(self, DrawingEvent::BrushChanged(_))
    }
}
