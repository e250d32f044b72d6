mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::DrawingEvent;
pub use handlers::RepaintOnChange;

/// Receives every change made to the drawing or the brush
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &DrawingEvent);
}
