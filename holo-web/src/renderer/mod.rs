//! Renderer module - WebGPU rendering for the globe and hand overlay
//!
//! Re-exports only. All logic in submodules.

mod scene;
mod shapes;
mod state;

pub use scene::render_frame;
pub use state::{initialize_gpu, GpuStateError};
