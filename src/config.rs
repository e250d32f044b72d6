use egui::Vec2;

/// Window settings for the native shell
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub initial_size: Vec2,
    pub min_size: Vec2,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sketchpad".to_owned(),
            initial_size: Vec2::new(480.0, 800.0),
            min_size: Vec2::new(320.0, 400.0),
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.initial_size)
                .with_min_inner_size(self.min_size),
            ..Default::default()
        }
    }
}
