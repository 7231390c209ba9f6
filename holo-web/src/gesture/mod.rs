//! Gesture module - landmark parsing and heuristic classification
//!
//! Re-exports only. All logic in submodules.

mod classify;
mod landmarks;

pub use classify::{
    classify, count_extended_fingers, Classification, GestureType,
    CENTER_CURSOR, FINGER_EXTENSION_RATIO, PINCH_THRESHOLD, THUMB_EXTENSION_DISTANCE,
};
pub use landmarks::{
    HandLandmark, HandLandmarks, FLOATS_PER_HAND, HAND_SKELETON, LANDMARK_COUNT,
    INDEX_TIP, THUMB_TIP, WRIST, PINKY_MCP,
};

#[cfg(test)]
pub(crate) use classify::fixtures;
