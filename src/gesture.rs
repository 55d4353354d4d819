//! Pointer gesture types and the host-facing responder contract.
//!
//! The host owns event delivery and gesture arbitration; the slider engine
//! implements [`GestureResponder`] against it. Negotiation follows the usual
//! mobile pattern: the host asks [`GestureResponder::should_claim`] before
//! routing a new touch, delivers lifecycle calls while the gesture runs, and
//! may ask the responder to yield to a competitor.

use crate::geometry::Point;

/// One pointer phase, as delivered by the host.
///
/// Translations are cumulative since the gesture started, in pixels, with
/// both axes carried; picking the active axis stays a slider concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch landed.
    Start { location: Point },
    /// The claimed touch moved.
    Move { translation: (f32, f32) },
    /// The claimed touch lifted normally.
    End { translation: (f32, f32) },
    /// The platform tore the gesture away mid-drag.
    Cancel { translation: (f32, f32) },
}

/// Drag lifecycle state. At most one session exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A claimed gesture, keyed to the thumb offset at claim time.
    Active { previous_offset: f32 },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Active { .. })
    }
}

/// The contract a host event system drives a slider through.
pub trait GestureResponder<M> {
    /// Whether a new touch at `location` should claim the gesture. Must be
    /// side-effect free; the host may ask several candidate handlers.
    fn should_claim(&self, location: Point) -> bool;

    /// The claimed gesture begins. Returns the messages the registered
    /// callbacks produced.
    fn on_start(&mut self, location: Point) -> Vec<M>;

    /// The claimed gesture moved.
    fn on_move(&mut self, translation: (f32, f32)) -> Vec<M>;

    /// The claimed gesture finished or was torn away.
    fn on_end(&mut self, translation: (f32, f32)) -> Vec<M>;

    /// A competing recognizer asks this responder to yield control.
    /// Sliders never yield mid-drag, so the default declines.
    fn on_termination_request(&self) -> bool {
        false
    }

    /// Route one pointer phase through the negotiation protocol: a start is
    /// delivered only if claimed, a cancel finishes like an end.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> Vec<M> {
        match *event {
            PointerEvent::Start { location } => {
                if self.should_claim(location) {
                    self.on_start(location)
                } else {
                    Vec::new()
                }
            }
            PointerEvent::Move { translation } => self.on_move(translation),
            PointerEvent::End { translation } | PointerEvent::Cancel { translation } => {
                self.on_end(translation)
            }
        }
    }
}
