//! Page controls and the per-frame tick
//!
//! Mode toggle, model selection, pointer drag, and the read-side getters
//! the page uses for the POI label and explore button.

use wasm_bindgen::prelude::*;

use super::session::with_session;
use crate::globe::Poi;
use crate::interaction::InteractionMode;

// ============================================================================
// FRAME LOOP
// ============================================================================

/// Advance the scene one frame at `time_secs` (wall clock).
///
/// Returns the id of the active POI when it changed this frame, otherwise
/// None. The page should treat a returned id as a one-shot event.
pub fn tick(time_secs: f64) -> Option<&'static str> {
    let changed = with_session(|session| session.on_frame(time_secs))?;
    console_log!("📍 Active POI: {}", changed.label);
    Some(changed.id)
}

/// Integrate one frame without drawing (for hosts that render elsewhere)
#[wasm_bindgen]
pub fn frame_tick() -> Option<String> {
    tick(js_sys::Date::now() / 1000.0).map(str::to_owned)
}

/// `[rotation_x, rotation_y, scale, glow_scale]` for the current frame
#[wasm_bindgen]
pub fn get_transform() -> Vec<f32> {
    with_session(|session| {
        let state = session.state();
        vec![state.rotation.x, state.rotation.y, state.scale, session.glow()]
    })
}

// ============================================================================
// MODE / MODEL
// ============================================================================

#[wasm_bindgen]
pub fn set_interaction_mode(mode: InteractionMode) {
    if with_session(|session| session.set_mode(mode)) {
        console_log!("🔀 Interaction mode: {}", mode.as_str());
    }
}

#[wasm_bindgen]
pub fn get_interaction_mode() -> InteractionMode {
    with_session(|session| session.mode())
}

/// Called when the user picks a model; resets the pose
#[wasm_bindgen]
pub fn select_model() {
    with_session(|session| session.select_model());
    console_log!("🌍 Model selected, pose reset");
}

// ============================================================================
// POINTER (classic mode orbit)
// ============================================================================

#[wasm_bindgen]
pub fn set_pointer_dragging(dragging: bool) {
    with_session(|session| session.set_pointer_dragging(dragging));
}

/// Pointer travel since the last call, divided by canvas height
#[wasm_bindgen]
pub fn add_pointer_delta(dx: f32, dy: f32) {
    with_session(|session| session.add_pointer_delta(dx, dy));
}

// ============================================================================
// POINTS OF INTEREST
// ============================================================================

fn active_poi() -> Option<&'static Poi> {
    with_session(|session| session.active_poi())
}

#[wasm_bindgen]
pub fn get_active_poi_id() -> Option<String> {
    active_poi().map(|p| p.id.to_owned())
}

#[wasm_bindgen]
pub fn get_active_poi_label() -> Option<String> {
    active_poi().map(|p| p.label.to_owned())
}

/// Target for the explore button; the page does the navigation
#[wasm_bindgen]
pub fn get_active_poi_url() -> Option<String> {
    active_poi().map(|p| p.url.to_owned())
}

#[wasm_bindgen]
pub fn get_active_poi_description() -> Option<String> {
    active_poi().and_then(|p| p.description).map(str::to_owned)
}

#[wasm_bindgen]
pub fn get_poi_count() -> usize {
    with_session(|session| session.pois().len())
}
