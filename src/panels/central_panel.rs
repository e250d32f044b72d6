use crate::canvas::CanvasView;
use crate::store::StrokeStore;
use crate::surface::BACKGROUND;

pub fn central_panel(canvas: &mut CanvasView, store: &mut StrokeStore, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            canvas.show(ui, store);
        });
}
