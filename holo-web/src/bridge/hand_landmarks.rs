//! Hand landmark entry point - MediaPipe results in, display status out
//!
//! Only the first hand is used. Malformed buffers count as "no hand";
//! a bad frame from the provider is never an error for the page.

use wasm_bindgen::prelude::*;

use super::session::with_session;
use crate::gesture::{HandLandmarks, FLOATS_PER_HAND};
use crate::interaction::HandStatus;

/// Pick the first hand out of the provider's flat buffer
fn first_hand(flat_data: &[f32], num_hands: usize) -> Option<HandLandmarks> {
    if num_hands == 0 {
        return None;
    }
    if flat_data.len() < FLOATS_PER_HAND {
        console_warn!(
            "Invalid hand landmark data length: {} (expected at least {})",
            flat_data.len(),
            FLOATS_PER_HAND
        );
        return None;
    }
    HandLandmarks::from_flat(flat_data, 0)
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JS on every MediaPipe Hands result.
///
/// `flat_data` holds `num_hands × 21 × 3` floats (x, y, z per landmark).
/// Returns the status snapshot for the HUD.
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) -> HandStatus {
    let hand = first_hand(flat_data, num_hands);
    with_session(|session| session.on_detection(hand.as_ref()))
}

/// Last published status (same value `apply_hand_landmarks` returned)
#[wasm_bindgen]
pub fn get_hand_status() -> HandStatus {
    with_session(|session| session.status())
}

/// HUD text block for the current status
#[wasm_bindgen]
pub fn get_status_text() -> String {
    with_session(|session| session.status().summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hand_needs_a_hand() {
        let flat = vec![0.5; FLOATS_PER_HAND];
        assert!(first_hand(&flat, 0).is_none());
        assert!(first_hand(&flat, 1).is_some());
    }

    #[test]
    fn test_first_hand_ignores_extra_hands() {
        let mut flat = vec![0.1; FLOATS_PER_HAND * 2];
        flat[FLOATS_PER_HAND] = 0.9;
        let hand = first_hand(&flat, 2).unwrap();
        assert!(hand.points().iter().all(|p| p.x == 0.1));
    }

    #[test]
    fn test_short_buffer_is_no_hand() {
        let flat = vec![0.5; FLOATS_PER_HAND - 3];
        assert!(first_hand(&flat, 1).is_none());
    }
}
