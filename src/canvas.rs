use egui::{Color32, Pos2, Rect, Response, Sense, TextureHandle, TextureOptions, Ui, pos2, vec2};

use crate::input::{GestureHandler, gestures_from_response};
use crate::store::StrokeStore;
use crate::surface::{self, SurfaceSize};

/// The drawing area: feeds drags to the store and shows the rendered strokes.
///
/// The raster is rebuilt from scratch whenever the store's revision or the
/// surface size changes, and reused otherwise.
#[derive(Default)]
pub struct CanvasView {
    gestures: GestureHandler,
    texture: Option<TextureHandle>,
    rendered: Option<(u64, SurfaceSize)>,
}

impl std::fmt::Debug for CanvasView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasView")
            .field("gestures", &self.gestures)
            .field("has_texture", &self.texture.is_some())
            .field("rendered", &self.rendered)
            .finish()
    }
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut Ui, store: &mut StrokeStore) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;

        let events = gestures_from_response(&response, rect.min, self.gestures.is_active());
        self.gestures.handle_all(events, store);

        let size = match SurfaceSize::from_vec2(rect.size()) {
            Ok(size) => size,
            Err(err) => {
                log::warn!("Skipping canvas redraw: {}", err);
                return response;
            }
        };
        self.refresh(ui.ctx(), store, size);

        if let Some(texture) = &self.texture {
            let image_rect = Rect::from_min_size(rect.min, vec2(size.width as f32, size.height as f32));
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        response
    }

    /// Whether the last rendered raster matches this revision and size
    pub fn is_current(&self, revision: u64, size: SurfaceSize) -> bool {
        self.rendered == Some((revision, size))
    }

    fn refresh(&mut self, ctx: &egui::Context, store: &StrokeStore, size: SurfaceSize) {
        if self.is_current(store.revision(), size) {
            return;
        }
        self.rendered = Some((store.revision(), size));

        if size.is_empty() {
            self.texture = None;
            return;
        }

        log::debug!(
            "Redrawing {} strokes at {}x{} (revision {})",
            store.len(),
            size.width,
            size.height,
            store.revision()
        );
        let image = surface::to_color_image(&surface::render(store.strokes(), size));
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
            }
        }
    }
}
