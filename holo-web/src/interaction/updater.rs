//! Detection-cycle update: classifier output -> interaction targets
//!
//! Runs once per landmark provider callback. Never touches `rotation` or
//! `scale`; those belong to the frame integrator.

use super::state::InteractionState;
use crate::gesture::{Classification, GestureType};

/// Radians of target rotation per unit of normalized cursor travel
pub const SENSITIVITY: f32 = 5.0;

/// Fold one classification into the shared state.
///
/// A missing hand only clears the gesture fields; the pose, its targets and
/// the last hand position are kept so the globe holds still.
pub fn apply_classification(state: &mut InteractionState, result: &Classification) {
    if !result.detected {
        state.release_hand();
        return;
    }

    let cursor = result.cursor;

    if result.gesture == GestureType::Pinch {
        if !state.is_pinching {
            // Pinch just started: anchor here so the first delta is zero
            state.last_hand_position = cursor;
        }

        let delta = cursor - state.last_hand_position;

        // Horizontal drag spins around Y, vertical drag tilts around X
        state.target_rotation.y += delta.x * SENSITIVITY;
        state.target_rotation.x += delta.y * SENSITIVITY;

        state.last_hand_position = cursor;
    }

    state.is_pinching = result.gesture == GestureType::Pinch;
    state.gesture = result.gesture;
    state.hand_position = cursor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Vec2;

    fn detected(gesture: GestureType, x: f32, y: f32) -> Classification {
        Classification {
            gesture,
            is_pinching: gesture == GestureType::Pinch,
            cursor: Vec2::new(x, y),
            detected: true,
        }
    }

    #[test]
    fn test_pinch_drag_scenario() {
        let mut state = InteractionState::new();
        let start = state.target_rotation;

        apply_classification(&mut state, &detected(GestureType::Pinch, 0.4, 0.4));
        apply_classification(&mut state, &detected(GestureType::Pinch, 0.5, 0.45));

        assert!((state.target_rotation.y - (start.y + 0.5)).abs() < 1e-5);
        assert!((state.target_rotation.x - (start.x + 0.25)).abs() < 1e-5);
        assert_eq!(state.last_hand_position, Vec2::new(0.5, 0.45));
    }

    #[test]
    fn test_pinch_start_never_jumps() {
        let mut state = InteractionState::new();
        // Stale reference point from a long-gone hand
        state.last_hand_position = Vec2::new(0.0, 0.0);
        let before = state.target_rotation;

        apply_classification(&mut state, &detected(GestureType::Pinch, 0.9, 0.8));

        assert_eq!(state.target_rotation, before);
        assert!(state.is_pinching);
        assert_eq!(state.last_hand_position, Vec2::new(0.9, 0.8));
    }

    #[test]
    fn test_pinch_restart_after_release_reanchors() {
        let mut state = InteractionState::new();
        apply_classification(&mut state, &detected(GestureType::Pinch, 0.2, 0.2));
        apply_classification(&mut state, &detected(GestureType::Open, 0.6, 0.6));
        let before = state.target_rotation;

        apply_classification(&mut state, &detected(GestureType::Pinch, 0.7, 0.7));
        assert_eq!(state.target_rotation, before);
    }

    #[test]
    fn test_non_pinch_moves_cursor_only() {
        let mut state = InteractionState::new();
        let before = state.clone();

        apply_classification(&mut state, &detected(GestureType::Open, 0.3, 0.6));

        assert_eq!(state.gesture, GestureType::Open);
        assert!(!state.is_pinching);
        assert_eq!(state.hand_position, Vec2::new(0.3, 0.6));
        assert_eq!(state.target_rotation, before.target_rotation);
        assert_eq!(state.target_scale, before.target_scale);
        assert_eq!(state.last_hand_position, before.last_hand_position);
    }

    #[test]
    fn test_hand_loss_resets_gesture_keeps_pose() {
        let mut state = InteractionState::new();
        state.rotation = Vec2::new(0.3, 1.1);
        state.scale = 2.0;
        apply_classification(&mut state, &detected(GestureType::Pinch, 0.4, 0.4));
        let target = state.target_rotation;

        apply_classification(&mut state, &Classification::no_hand());

        assert_eq!(state.gesture, GestureType::Idle);
        assert!(!state.is_pinching);
        assert_eq!(state.rotation, Vec2::new(0.3, 1.1));
        assert_eq!(state.scale, 2.0);
        assert_eq!(state.target_rotation, target);
    }

    #[test]
    fn test_rotation_accumulates_unbounded() {
        let mut state = InteractionState::new();
        for _ in 0..50 {
            apply_classification(&mut state, &detected(GestureType::Pinch, 0.0, 0.5));
            apply_classification(&mut state, &detected(GestureType::Pinch, 1.0, 0.5));
            apply_classification(&mut state, &Classification::no_hand());
        }
        // 50 sweeps x 1.0 x 5.0
        assert!((state.target_rotation.y - 250.0).abs() < 1e-3);
    }
}
