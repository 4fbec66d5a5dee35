//! Swipe gesture recognition from terminal mouse events
//!
//! Tracks a single press-drag-release with the primary mouse button and
//! reduces it to a horizontal translation in columns. Classification against
//! the swipe threshold lives in `models::screen`; this module only produces
//! the raw translation. Arrow keys act as synthetic swipes so the app stays
//! usable without a mouse.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::models::SwipeDirection;

/// Tracks an in-flight horizontal drag.
#[derive(Debug, Default)]
pub struct DragTracker {
    press_column: Option<u16>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event. Returns the completed drag's horizontal
    /// translation (release column minus press column, leftward negative)
    /// when the button comes back up.
    pub fn on_mouse_event(&mut self, event: MouseEvent) -> Option<f32> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press_column = Some(event.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.press_column.take()?;
                Some(f32::from(event.column) - f32::from(pressed))
            }
            _ => None,
        }
    }

    /// Abandon any in-flight drag (screen change, focus loss).
    pub fn reset(&mut self) {
        self.press_column = None;
    }
}

/// Translation reported for an arrow-key swipe. Any value past the threshold
/// works; keys have no measurable drag distance.
pub const KEY_SWIPE_TRANSLATION: f32 = 120.0;

/// Synthetic translation for a key-driven swipe in `direction`.
pub fn key_swipe_translation(direction: SwipeDirection) -> f32 {
    match direction {
        SwipeDirection::Left => -KEY_SWIPE_TRANSLATION,
        SwipeDirection::Right => KEY_SWIPE_TRANSLATION,
    }
}
