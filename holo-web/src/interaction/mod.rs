//! Interaction module - shared state, detection updater, frame integrator
//!
//! Re-exports only. All logic in submodules.

mod integrator;
mod state;
mod status;
mod updater;

pub use integrator::{
    glow_scale, integrate, FrameInput, InteractionMode,
    CLASSIC_SPIN_X, CLASSIC_SPIN_Y, LERP_FACTOR, ORBIT_ROTATE_SPEED, SCALE_SPEED,
};
pub use state::{InteractionState, Vec2, INITIAL_TARGET_ROTATION, MAX_SCALE, MIN_SCALE};
pub use status::HandStatus;
pub use updater::{apply_classification, SENSITIVITY};
