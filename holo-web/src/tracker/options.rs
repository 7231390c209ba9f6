//! MediaPipe Hands options handed to the JS host
//!
//! Gesture logic only ever looks at the first hand, so tracking more is wasted work.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Options for `hands.setOptions(...)` on the JS side
#[wasm_bindgen]
pub fn tracker_options() -> TrackerOptions {
    TrackerOptions::default()
}
