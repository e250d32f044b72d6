use egui::{Color32, Pos2, Rect};

use crate::brush::BrushConfig;

/// One continuous drag gesture: an ordered polyline with a fixed color and width.
///
/// Points can only be appended through [`crate::StrokeStore::extend_stroke`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Starts a stroke at `start`, snapshotting the brush by value
    pub fn new(start: Pos2, brush: &BrushConfig) -> Self {
        Self {
            points: vec![start],
            color: brush.color(),
            width: brush.width(),
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Area touched when painted, including the round caps
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::NOTHING;
        for point in &self.points {
            rect.extend_with(*point);
        }
        rect.expand(self.width / 2.0)
    }

    pub(crate) fn push(&mut self, point: Pos2) {
        self.points.push(point);
    }
}
