use egui::{Color32, Pos2};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::brush::BrushConfig;
use crate::event::{DrawingEvent, EventBus, EventHandler};
use crate::stroke::Stroke;

/// Store handle for hosts that feed input and render on different threads.
///
/// Holding the lock is the only way to reach the drawing, so no stroke is
/// read while another thread is appending to it.
pub type SharedStrokeStore = Arc<Mutex<StrokeStore>>;

/// Owns the drawing (the ordered strokes) and the current brush.
///
/// Every operation is total: misuse such as undoing an empty drawing is a
/// no-op. Each change to the strokes bumps [`StrokeStore::revision`] and is
/// announced on the store's [`EventBus`].
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    brush: BrushConfig,
    revision: u64,
    events: EventBus,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brush(brush: BrushConfig) -> Self {
        Self {
            brush,
            ..Self::default()
        }
    }

    pub fn into_shared(self) -> SharedStrokeStore {
        Arc::new(Mutex::new(self))
    }

    /// Register a handler notified after every mutation
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Strokes in paint order, oldest first
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Incremented on every change to the strokes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a new stroke holding only `point`, colored and sized by the current brush
    pub fn begin_stroke(&mut self, point: Pos2) {
        self.strokes.push(Stroke::new(point, &self.brush));
        let index = self.strokes.len() - 1;
        log::debug!(
            "Began stroke {} at {:?} (color {:?}, width {})",
            index,
            point,
            self.brush.color(),
            self.brush.width()
        );
        self.changed(DrawingEvent::StrokeBegun { index });
    }

    /// Appends `point` to the last stroke; does nothing if there are no strokes
    pub fn extend_stroke(&mut self, point: Pos2) {
        let Some(index) = self.strokes.len().checked_sub(1) else {
            log::debug!("extend_stroke with no stroke in progress, ignoring {:?}", point);
            return;
        };
        let stroke = &mut self.strokes[index];
        stroke.push(point);
        let point_count = stroke.len();
        self.changed(DrawingEvent::StrokeExtended { index, point_count });
    }

    /// Removes the last stroke; does nothing if there are no strokes
    pub fn undo(&mut self) {
        if self.strokes.pop().is_none() {
            log::debug!("Nothing to undo");
            return;
        }
        let remaining = self.strokes.len();
        log::info!("Undid last stroke, {} remaining", remaining);
        self.changed(DrawingEvent::Undone { remaining });
    }

    /// Removes every stroke
    pub fn clear(&mut self) {
        let removed = self.strokes.len();
        self.strokes.clear();
        log::info!("Cleared {} strokes", removed);
        self.changed(DrawingEvent::Cleared { removed });
    }

    pub fn set_brush_color(&mut self, color: impl Into<Color32>) {
        self.brush.set_color(color);
        self.events.emit(DrawingEvent::BrushChanged(self.brush));
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.brush.set_width(width);
        self.events.emit(DrawingEvent::BrushChanged(self.brush));
    }

    fn changed(&mut self, event: DrawingEvent) {
        self.revision += 1;
        self.events.emit(event);
    }
}
