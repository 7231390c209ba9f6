//! Per-render-frame transform integration
//!
//! Gesture mode eases `rotation`/`scale` toward their targets with a fixed
//! per-frame factor. The step is not scaled by elapsed time, so convergence
//! speed follows the display refresh rate.
//!
//! Classic mode ignores the targets: the globe spins slowly on its own and a
//! pointer drag orbits it directly.

use std::f32::consts::TAU;

use wasm_bindgen::prelude::*;

use super::state::{InteractionState, Vec2, MAX_SCALE, MIN_SCALE};
use crate::gesture::GestureType;

/// Fraction of the remaining distance covered each frame
pub const LERP_FACTOR: f32 = 0.1;

/// Target scale change per frame while a zoom gesture is held
pub const SCALE_SPEED: f32 = 0.05;

/// Classic-mode auto rotation per frame (radians)
pub const CLASSIC_SPIN_X: f32 = 0.0005;
pub const CLASSIC_SPIN_Y: f32 = 0.002;

/// Full turns per canvas-height of pointer travel, halved
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;

/// Glow pulse: base scale and amplitude
pub const GLOW_BASE: f32 = 1.2;
pub const GLOW_AMPLITUDE: f32 = 0.02;

/// Which input drives the globe
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Mouse-drag orbit with idle auto-rotation
    Classic,
    /// Webcam hand tracking
    Gesture,
}

impl Default for InteractionMode {
    fn default() -> Self {
        InteractionMode::Classic
    }
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Classic => "classic",
            InteractionMode::Gesture => "gesture",
        }
    }
}

/// Everything the frame loop needs from outside the shared state
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Wall-clock seconds, only used by the glow pulse
    pub time_secs: f64,
    /// Pointer travel since last frame (canvas-height units) while a drag is held
    pub drag: Option<Vec2>,
}

/// Cosmetic glow scale for a given time
pub fn glow_scale(time_secs: f64) -> f32 {
    GLOW_BASE + (time_secs.sin() as f32) * GLOW_AMPLITUDE
}

fn lerp(current: f32, target: f32) -> f32 {
    current + (target - current) * LERP_FACTOR
}

/// Grow or shrink the target scale while OPEN/CLOSED is held
fn advance_target_scale(state: &mut InteractionState) {
    match state.gesture {
        GestureType::Open => {
            state.target_scale = (state.target_scale + SCALE_SPEED).min(MAX_SCALE);
        }
        GestureType::Closed => {
            state.target_scale = (state.target_scale - SCALE_SPEED).max(MIN_SCALE);
        }
        GestureType::Idle | GestureType::Pinch => {}
    }
}

fn integrate_gesture(state: &mut InteractionState) {
    state.rotation.x = lerp(state.rotation.x, state.target_rotation.x);
    state.rotation.y = lerp(state.rotation.y, state.target_rotation.y);

    advance_target_scale(state);
    state.scale = lerp(state.scale, state.target_scale);
}

fn integrate_classic(state: &mut InteractionState, drag: Option<Vec2>) {
    match drag {
        Some(delta) => {
            // Pointer owns the globe this frame
            let step = TAU * ORBIT_ROTATE_SPEED;
            state.rotation.y += delta.x * step;
            state.rotation.x += delta.y * step;
        }
        None => {
            state.rotation.x += CLASSIC_SPIN_X;
            state.rotation.y += CLASSIC_SPIN_Y;
        }
    }
}

/// Advance one render frame. Returns the glow scale for this frame.
pub fn integrate(state: &mut InteractionState, mode: InteractionMode, input: &FrameInput) -> f32 {
    match mode {
        InteractionMode::Gesture => integrate_gesture(state),
        InteractionMode::Classic => integrate_classic(state, input.drag),
    }

    glow_scale(input.time_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture_tick(state: &mut InteractionState) {
        integrate(state, InteractionMode::Gesture, &FrameInput::default());
    }

    #[test]
    fn test_single_lerp_step() {
        let mut state = InteractionState::new();
        state.target_rotation = Vec2::new(1.0, -2.0);
        state.target_scale = 2.0;

        gesture_tick(&mut state);

        assert!((state.rotation.x - 0.1).abs() < 1e-6);
        assert!((state.rotation.y + 0.2).abs() < 1e-6);
        assert!((state.scale - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_converges_monotonically() {
        let mut state = InteractionState::new();
        state.target_rotation = Vec2::new(3.0, -1.5);
        state.target_scale = 2.5;

        let gap = |s: &InteractionState| {
            (
                (s.target_rotation - s.rotation).length(),
                (s.target_scale - s.scale).abs(),
            )
        };

        let mut prev = gap(&state);
        for _ in 0..300 {
            gesture_tick(&mut state);
            let now = gap(&state);
            assert!(now.0 <= prev.0);
            assert!(now.1 <= prev.1);
            prev = now;
        }

        assert!(prev.0 < 1e-5);
        assert!(prev.1 < 1e-5);
    }

    #[test]
    fn test_target_scale_clamped_open() {
        let mut state = InteractionState::new();
        state.gesture = GestureType::Open;
        for _ in 0..200 {
            gesture_tick(&mut state);
            assert!(state.target_scale <= MAX_SCALE);
        }
        assert_eq!(state.target_scale, MAX_SCALE);
    }

    #[test]
    fn test_target_scale_clamped_closed() {
        let mut state = InteractionState::new();
        state.gesture = GestureType::Closed;
        for _ in 0..200 {
            gesture_tick(&mut state);
            assert!(state.target_scale >= MIN_SCALE);
        }
        assert_eq!(state.target_scale, MIN_SCALE);
    }

    #[test]
    fn test_alternating_zoom_stays_in_bounds() {
        let mut state = InteractionState::new();
        for i in 0..500 {
            state.gesture = if (i / 37) % 2 == 0 {
                GestureType::Open
            } else {
                GestureType::Closed
            };
            gesture_tick(&mut state);
            assert!((MIN_SCALE..=MAX_SCALE).contains(&state.target_scale));
        }
    }

    #[test]
    fn test_pinch_and_idle_hold_target_scale() {
        let mut state = InteractionState::new();
        state.target_scale = 1.7;
        state.gesture = GestureType::Pinch;
        gesture_tick(&mut state);
        state.gesture = GestureType::Idle;
        gesture_tick(&mut state);
        assert_eq!(state.target_scale, 1.7);
    }

    #[test]
    fn test_classic_auto_rotates() {
        let mut state = InteractionState::new();
        state.gesture = GestureType::Open;
        let input = FrameInput::default();

        for _ in 0..10 {
            integrate(&mut state, InteractionMode::Classic, &input);
        }

        assert!((state.rotation.x - 10.0 * CLASSIC_SPIN_X).abs() < 1e-6);
        assert!((state.rotation.y - 10.0 * CLASSIC_SPIN_Y).abs() < 1e-6);
        // No zoom in classic mode
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.target_scale, 1.0);
    }

    #[test]
    fn test_classic_drag_suspends_auto_rotation() {
        let mut state = InteractionState::new();
        let input = FrameInput { time_secs: 0.0, drag: Some(Vec2::ZERO) };

        integrate(&mut state, InteractionMode::Classic, &input);
        assert_eq!(state.rotation, Vec2::ZERO);

        let input = FrameInput { time_secs: 0.0, drag: Some(Vec2::new(0.1, -0.05)) };
        integrate(&mut state, InteractionMode::Classic, &input);
        assert!((state.rotation.y - 0.1 * TAU * ORBIT_ROTATE_SPEED).abs() < 1e-6);
        assert!((state.rotation.x + 0.05 * TAU * ORBIT_ROTATE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_glow_pulse() {
        assert!((glow_scale(0.0) - 1.2).abs() < 1e-6);
        assert!((glow_scale(std::f64::consts::FRAC_PI_2) - 1.22).abs() < 1e-6);
        for i in 0..100 {
            let g = glow_scale(i as f64 * 0.37);
            assert!((1.18 - 1e-6..=1.22 + 1e-6).contains(&g));
        }
    }
}
