#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod store;
pub mod stroke;
pub mod surface;

pub use app::SketchApp;
pub use brush::{BrushConfig, PaletteColor};
pub use canvas::CanvasView;
pub use config::AppConfig;
pub use error::SurfaceError;
pub use event::{DrawingEvent, EventBus, EventHandler};
pub use input::{GestureEvent, GestureHandler};
pub use store::{SharedStrokeStore, StrokeStore};
pub use stroke::Stroke;
pub use surface::{SurfaceSize, render};
