//! Heuristic gesture classification from a single landmark set
//!
//! Thresholds are in normalized image units and were tuned by eye.
//! Crossing one never errors, it just selects another branch.

use wasm_bindgen::prelude::*;

use super::landmarks::{
    HandLandmarks, FINGER_TIPS_AND_PIPS, INDEX_TIP, PINKY_MCP, THUMB_TIP, WRIST,
};
use crate::interaction::Vec2;

/// Index-tip to thumb-tip distance below which the hand is pinching
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Tip must be this much further from the wrist than its PIP joint
pub const FINGER_EXTENSION_RATIO: f32 = 1.1;

/// Thumb-tip to pinky-MCP distance above which the thumb is out
pub const THUMB_EXTENSION_DISTANCE: f32 = 0.2;

/// Cursor reported when no hand is in frame
pub const CENTER_CURSOR: Vec2 = Vec2 { x: 0.5, y: 0.5 };

/// Discrete gesture label
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureType {
    Idle,
    /// Thumb + index together: drag to rotate
    Pinch,
    /// Spread hand: zoom in
    Open,
    /// Fist: zoom out
    Closed,
}

impl Default for GestureType {
    fn default() -> Self {
        GestureType::Idle
    }
}

impl GestureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureType::Idle => "IDLE",
            GestureType::Pinch => "PINCH",
            GestureType::Open => "OPEN",
            GestureType::Closed => "CLOSED",
        }
    }
}

/// Classifier output for one detection cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub gesture: GestureType,
    pub is_pinching: bool,
    /// Mirrored index-tip position, 0-1 normalized
    pub cursor: Vec2,
    /// False when the provider reported no hand
    pub detected: bool,
}

impl Classification {
    /// Result for a cycle with no hand in frame
    pub fn no_hand() -> Self {
        Self {
            gesture: GestureType::Idle,
            is_pinching: false,
            cursor: CENTER_CURSOR,
            detected: false,
        }
    }
}

/// Count extended fingers (0-5), thumb included
pub fn count_extended_fingers(hand: &HandLandmarks) -> usize {
    let fingers = FINGER_TIPS_AND_PIPS
        .iter()
        .filter(|(tip, pip)| {
            hand.distance(*tip, WRIST) > hand.distance(*pip, WRIST) * FINGER_EXTENSION_RATIO
        })
        .count();

    // Thumb folds across the palm rather than toward the wrist
    let thumb = hand.distance(THUMB_TIP, PINKY_MCP) > THUMB_EXTENSION_DISTANCE;

    fingers + usize::from(thumb)
}

/// Classify one hand. `None` means the provider saw no hand this cycle.
pub fn classify(hand: Option<&HandLandmarks>) -> Classification {
    let hand = match hand {
        Some(h) => h,
        None => return Classification::no_hand(),
    };

    let index_tip = hand.get(INDEX_TIP);
    // Camera feed is mirrored
    let cursor = Vec2::new(1.0 - index_tip.x, index_tip.y);

    let is_pinching = hand.distance(INDEX_TIP, THUMB_TIP) < PINCH_THRESHOLD;
    let extended = count_extended_fingers(hand);

    let gesture = if is_pinching {
        GestureType::Pinch
    } else if extended >= 4 {
        GestureType::Open
    } else if extended <= 1 {
        GestureType::Closed
    } else {
        GestureType::Idle
    };

    Classification {
        gesture,
        is_pinching,
        cursor,
        detected: true,
    }
}
