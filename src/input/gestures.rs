use super::GestureEvent;
use crate::store::StrokeStore;

/// Turns pointer gestures into stroke store calls.
///
/// Every move becomes a point exactly as reported: no smoothing, resampling
/// or distance thresholding.
#[derive(Debug, Default)]
pub struct GestureHandler {
    /// Index of the stroke begun by the current gesture
    stroke: Option<usize>,
}

impl GestureHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn handle(&mut self, event: GestureEvent, store: &mut StrokeStore) {
        match event {
            GestureEvent::Start(pos) => {
                store.begin_stroke(pos);
                self.stroke = Some(store.len() - 1);
            }
            // Points are recorded where reported; the delta is not needed.
            GestureEvent::Move { pos, delta: _ } => match self.stroke {
                // The stroke may have been undone or cleared mid-gesture.
                Some(index) if index + 1 == store.len() => store.extend_stroke(pos),
                Some(_) => {
                    log::debug!("Stroke of the current gesture is gone, ending gesture");
                    self.stroke = None;
                }
                None => log::trace!("Dropping move at {:?} outside of a gesture", pos),
            },
            GestureEvent::End | GestureEvent::Cancel => {
                if self.stroke.take().is_some() {
                    log::debug!("Gesture finished ({:?})", event);
                }
            }
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = GestureEvent>, store: &mut StrokeStore) {
        for event in events {
            self.handle(event, store);
        }
    }
}
