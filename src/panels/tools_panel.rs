use egui::{Color32, Response, Sense, Stroke, Ui, vec2};

use crate::brush::{BrushConfig, PaletteColor};
use crate::store::StrokeStore;

const PANEL_FILL: Color32 = Color32::from_rgb(0xEF, 0xEF, 0xEF);
const SWATCH_SIZE: f32 = 40.0;

pub fn tools_panel(store: &mut StrokeStore, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .frame(egui::Frame::none().fill(PANEL_FILL).inner_margin(12.0))
        .show(ctx, |ui| {
            let mut width = store.brush().width();
            ui.label(format!("Brush Size: {}", width as i32));
            ui.style_mut().spacing.slider_width = ui.available_width();
            if ui
                .add(egui::Slider::new(&mut width, BrushConfig::WIDTH_RANGE).show_value(false))
                .changed()
            {
                store.set_brush_width(width);
            }

            ui.add_space(8.0);

            let current = store.brush().color();
            ui.columns(PaletteColor::ALL.len(), |columns| {
                for (column, palette) in columns.iter_mut().zip(PaletteColor::ALL) {
                    column.vertical_centered(|ui| {
                        let selected = current == palette.color();
                        if swatch(ui, palette, selected).clicked() {
                            log::info!("Brush color set to {}", palette.name());
                            store.set_brush_color(palette);
                        }
                    });
                }
            });

            ui.add_space(8.0);

            ui.columns(2, |columns| {
                columns[0].vertical_centered(|ui| {
                    if ui.add_enabled(!store.is_empty(), egui::Button::new("Undo")).clicked() {
                        store.undo();
                    }
                });
                columns[1].vertical_centered(|ui| {
                    if ui.add_enabled(!store.is_empty(), egui::Button::new("Clear")).clicked() {
                        store.clear();
                    }
                });
            });
        });
}

/// A round color button, outlined more heavily when selected
fn swatch(ui: &mut Ui, palette: PaletteColor, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
    if ui.is_rect_visible(rect) {
        let border = if selected {
            Stroke::new(3.0, Color32::DARK_GRAY)
        } else {
            Stroke::new(1.0, Color32::LIGHT_GRAY)
        };
        ui.painter()
            .circle(rect.center(), SWATCH_SIZE / 2.0 - border.width / 2.0, palette.color(), border);
    }
    response.on_hover_text(palette.name())
}
