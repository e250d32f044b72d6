use crate::canvas::CanvasView;
use crate::event::RepaintOnChange;
use crate::panels::{central_panel, tools_panel};
use crate::store::StrokeStore;

#[derive(Debug, Default)]
pub struct SketchApp {
    store: StrokeStore,
    canvas: CanvasView,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut store = StrokeStore::new();
        store.subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        log::info!("Sketchpad started");

        Self {
            store,
            canvas: CanvasView::new(),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.store.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(&mut self.store, ctx);
        central_panel(&mut self.canvas, &mut self.store, ctx);
    }
}
