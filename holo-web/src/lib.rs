//! Holo Web - gesture-controlled holographic globe
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

// Declared before the modules so they can use them. Native builds (tests)
// have no console; the arguments are still type-checked.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {{ let _ = format_args!($($t)*); }}
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => {{ let _ = format_args!($($t)*); }}
}

mod bridge;
mod gesture;
mod globe;
mod interaction;
#[cfg(target_arch = "wasm32")]
mod renderer;
mod tracker;

// Re-export wasm_bindgen types and functions for JS access
pub use bridge::{
    add_pointer_delta, apply_hand_landmarks, frame_tick, get_active_poi_description,
    get_active_poi_id, get_active_poi_label, get_active_poi_url, get_camera_status_text,
    get_debug_overlay_text, get_hand_status, get_interaction_mode, get_poi_count,
    get_status_text, get_transform, is_camera_ready, select_model, set_detection_latency,
    set_frame_metrics, set_interaction_mode, set_pointer_dragging, stop_camera,
};
#[cfg(target_arch = "wasm32")]
pub use bridge::start_camera;
pub use gesture::{classify, Classification, GestureType, HandLandmark, HandLandmarks};
pub use globe::{Poi, POIS};
pub use interaction::{HandStatus, InteractionMode, InteractionState, Vec2};
pub use tracker::{tracker_options, CameraStatus, TrackerOptions};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU initialized with globe rendering");
    Ok(())
}

/// Advance one frame and draw it.
///
/// Returns the id of the newly active POI when it changed this frame.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() -> Option<String> {
    let changed = bridge::tick(js_sys::Date::now() / 1000.0);
    renderer::render_frame();
    changed.map(str::to_owned)
}
