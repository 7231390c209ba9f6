//! Tracker module - landmark provider configuration and camera lifecycle
//!
//! Re-exports only. All logic in submodules.

mod lifecycle;
mod options;

pub use lifecycle::{CameraDevice, CameraError, CameraGuard, CameraSlot, CameraStatus};
pub use options::{tracker_options, TrackerOptions};
