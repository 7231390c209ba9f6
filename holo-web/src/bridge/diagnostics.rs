//! Performance metrics for the debug overlay
//!
//! Frame timing and detection latency, smoothed for display, plus the
//! current interaction readout from the session.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::session::with_session;

/// Weight of each new sample in the display average
const EMA_WEIGHT: f32 = 0.1;

/// Frame times outside this range (ms) come from a backgrounded tab or the
/// first frame and are dropped
const FRAME_TIME_RANGE_MS: std::ops::RangeInclusive<f32> = 1.0..=200.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Metrics {
    fps: f32,
    frame_time_ms: f32,
    detection_latency_ms: f32,
}

fn ema(current: f32, sample: f32) -> f32 {
    current * (1.0 - EMA_WEIGHT) + sample * EMA_WEIGHT
}

impl Metrics {
    fn record_frame(&mut self, fps: f32, frame_time_ms: f32) -> bool {
        if !FRAME_TIME_RANGE_MS.contains(&frame_time_ms) || !fps.is_finite() {
            return false;
        }
        self.fps = ema(self.fps, fps);
        self.frame_time_ms = ema(self.frame_time_ms, frame_time_ms);
        true
    }

    fn record_detection(&mut self, ms: f32) {
        if ms.is_finite() && ms >= 0.0 {
            self.detection_latency_ms = ema(self.detection_latency_ms, ms);
        }
    }

    fn overlay(&self, interaction: &str) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Hands: {:.0}ms\n\
             {}",
            self.fps, self.frame_time_ms, self.detection_latency_ms, interaction,
        )
    }
}

thread_local! {
    static METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    METRICS.with(|m| m.borrow_mut().record_frame(fps, frame_time_ms));
}

/// Time from video frame to landmark result
#[wasm_bindgen]
pub fn set_detection_latency(ms: f32) {
    METRICS.with(|m| m.borrow_mut().record_detection(ms));
}

/// Formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    let interaction = with_session(|session| {
        let state = session.state();
        format!(
            "{} | rot {:.2},{:.2} | x{:.2}",
            session.mode().as_str(),
            state.rotation.x,
            state.rotation.y,
            state.scale
        )
    });
    METRICS.with(|m| m.borrow().overlay(&interaction))
}
