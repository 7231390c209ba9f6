//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod camera;
mod controls;
mod diagnostics;
mod hand_landmarks;
mod session;

pub use camera::{get_camera_status_text, is_camera_ready, stop_camera};
#[cfg(target_arch = "wasm32")]
pub use camera::start_camera;

pub use controls::{
    // WASM entry points
    add_pointer_delta,
    frame_tick,
    get_active_poi_description,
    get_active_poi_id,
    get_active_poi_label,
    get_active_poi_url,
    get_interaction_mode,
    get_poi_count,
    get_transform,
    select_model,
    set_interaction_mode,
    set_pointer_dragging,
    // Internal API
    tick,
};

pub use diagnostics::{get_debug_overlay_text, set_detection_latency, set_frame_metrics};

pub use hand_landmarks::{apply_hand_landmarks, get_hand_status, get_status_text};

pub(crate) use session::with_session;
