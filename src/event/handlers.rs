use crate::event::{DrawingEvent, EventHandler};

/// Asks egui for a new frame whenever the canvas content changes
#[derive(Debug)]
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, event: &DrawingEvent) {
        if event.affects_canvas() {
            self.ctx.request_repaint();
        }
    }
}
