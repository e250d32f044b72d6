use egui::{Pos2, Response, Vec2};

mod gestures;
pub use gestures::GestureHandler;

/// A pointer gesture, with positions in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer was pressed and started dragging at this position
    Start(Pos2),
    /// The pointer moved while dragging.
    ///
    /// `delta` is the movement since the previous event as reported by the
    /// host; strokes only record `pos`.
    Move { pos: Pos2, delta: Vec2 },
    /// The pointer was released
    End,
    /// The drag was lost without a release (e.g. another widget took it)
    Cancel,
}

/// The drag state of the canvas widget for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragFrame {
    pub started: bool,
    pub dragged: bool,
    pub stopped: bool,
    pub pointer_pos: Option<Pos2>,
    pub press_origin: Option<Pos2>,
    pub delta: Vec2,
}

impl DragFrame {
    pub fn from_response(response: &Response) -> Self {
        Self {
            started: response.drag_started(),
            dragged: response.dragged(),
            stopped: response.drag_stopped(),
            pointer_pos: response.interact_pointer_pos(),
            press_origin: response.ctx.input(|i| i.pointer.press_origin()),
            delta: response.drag_delta(),
        }
    }

    /// Gestures for this frame. `origin` is the screen position of the
    /// surface's top-left corner and `active` whether a gesture is in progress.
    pub fn gestures(&self, origin: Pos2, active: bool) -> Vec<GestureEvent> {
        let to_local = |pos: Pos2| (pos - origin).to_pos2();
        let mut events = Vec::new();

        if self.started {
            if let Some(start) = self.press_origin.or(self.pointer_pos) {
                events.push(GestureEvent::Start(to_local(start)));
                if let Some(pos) = self.pointer_pos.filter(|pos| *pos != start) {
                    events.push(GestureEvent::Move {
                        pos: to_local(pos),
                        delta: pos - start,
                    });
                }
            }
        } else if self.dragged {
            // egui reports a drag every frame the button is held.
            if let Some(pos) = self.pointer_pos.filter(|_| self.delta != Vec2::ZERO) {
                events.push(GestureEvent::Move {
                    pos: to_local(pos),
                    delta: self.delta,
                });
            }
        }

        if self.stopped {
            events.push(GestureEvent::End);
        } else if active && !self.dragged && !self.started {
            events.push(GestureEvent::Cancel);
        }

        events
    }
}

/// Translates this frame's drag state of the canvas `response` into gestures
pub fn gestures_from_response(response: &Response, origin: Pos2, active: bool) -> Vec<GestureEvent> {
    DragFrame::from_response(response).gestures(origin, active)
}
