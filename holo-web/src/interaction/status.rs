//! Display status - the UI-facing snapshot of the hand pipeline
//!
//! Recomputed once per detection cycle and handed to JS by value. Unlike
//! `InteractionState` this is the only hand data the page reacts to.

use wasm_bindgen::prelude::*;

use super::state::InteractionState;
use crate::gesture::{GestureType, CENTER_CURSOR};

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandStatus {
    pub is_detected: bool,
    pub is_pinching: bool,
    pub gesture: GestureType,
    /// Cursor, 0-1 normalized, already mirrored
    pub cursor_x: f32,
    pub cursor_y: f32,
}

impl Default for HandStatus {
    fn default() -> Self {
        Self::searching()
    }
}

impl HandStatus {
    /// Status while no hand is in frame
    pub fn searching() -> Self {
        Self {
            is_detected: false,
            is_pinching: false,
            gesture: GestureType::Idle,
            cursor_x: CENTER_CURSOR.x,
            cursor_y: CENTER_CURSOR.y,
        }
    }

    /// Snapshot the shared state after a detection cycle
    pub fn project(state: &InteractionState, detected: bool) -> Self {
        if !detected {
            return Self::searching();
        }
        Self {
            is_detected: true,
            is_pinching: state.is_pinching,
            gesture: state.gesture,
            cursor_x: state.hand_position.x,
            cursor_y: state.hand_position.y,
        }
    }

    /// HUD action line
    pub fn label(&self) -> &'static str {
        match self.gesture {
            GestureType::Pinch => "MANIPULATION ACTIVE",
            GestureType::Open => "ZOOM IN [SPREAD]",
            GestureType::Closed => "ZOOM OUT [FIST]",
            GestureType::Idle => "IDLE",
        }
    }

    /// HUD tracking line
    pub fn detection_label(&self) -> &'static str {
        if self.is_detected {
            "SYSTEM ONLINE // HAND LOCKED"
        } else {
            "SEARCHING FOR INPUT..."
        }
    }

    /// Multi-line text block for the HUD
    pub fn summary(&self) -> String {
        format!(
            "{}\n{}\nX: {:.3}\nY: {:.3}",
            self.detection_label(),
            self.label(),
            self.cursor_x,
            self.cursor_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Vec2;

    #[test]
    fn test_projection_copies_state() {
        let mut state = InteractionState::new();
        state.gesture = GestureType::Pinch;
        state.is_pinching = true;
        state.hand_position = Vec2::new(0.25, 0.75);

        let status = HandStatus::project(&state, true);
        assert!(status.is_detected);
        assert!(status.is_pinching);
        assert_eq!(status.gesture, GestureType::Pinch);
        assert_eq!((status.cursor_x, status.cursor_y), (0.25, 0.75));

        // Snapshot, not a live view
        state.gesture = GestureType::Closed;
        assert_eq!(status.gesture, GestureType::Pinch);
    }

    #[test]
    fn test_no_hand_projects_centered_idle() {
        let mut state = InteractionState::new();
        state.hand_position = Vec2::new(0.9, 0.1);
        let status = HandStatus::project(&state, false);
        assert_eq!(status, HandStatus::searching());
        assert_eq!((status.cursor_x, status.cursor_y), (0.5, 0.5));
    }

    #[test]
    fn test_labels() {
        let mut status = HandStatus::searching();
        assert_eq!(status.label(), "IDLE");
        assert_eq!(status.detection_label(), "SEARCHING FOR INPUT...");

        status.is_detected = true;
        status.gesture = GestureType::Open;
        assert_eq!(status.label(), "ZOOM IN [SPREAD]");
        assert_eq!(status.detection_label(), "SYSTEM ONLINE // HAND LOCKED");

        status.gesture = GestureType::Closed;
        assert!(status.summary().contains("ZOOM OUT [FIST]"));
    }
}
