//! Interaction state - the single record shared by the detection and render callbacks
//!
//! Write ownership, per field:
//! - render frame (integrator): `rotation`, `scale`, `target_scale`
//! - detection cycle (updater): `target_rotation`, `gesture`, `is_pinching`,
//!   `hand_position`, `last_hand_position`
//! - explicit resets (model select, mode switch): any target
//!
//! Both callbacks run to completion on the one wasm thread, so no locking.

use std::ops::{Add, Mul, Sub};

use crate::gesture::GestureType;

/// Smallest uniform scale a closed fist can zoom out to
pub const MIN_SCALE: f32 = 0.5;

/// Largest uniform scale an open hand can zoom in to
pub const MAX_SCALE: f32 = 3.0;

/// Target rotation after a model switch (slight downward tilt)
pub const INITIAL_TARGET_ROTATION: Vec2 = Vec2 { x: 0.2, y: 0.0 };

/// 2D value: normalized screen position or (pitch, yaw) rotation in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    /// Current visual rotation (x = pitch, y = yaw)
    pub rotation: Vec2,
    pub target_rotation: Vec2,

    pub scale: f32,
    /// Always within [MIN_SCALE, MAX_SCALE]
    pub target_scale: f32,

    /// Last classified gesture
    pub gesture: GestureType,
    /// Cached `gesture == Pinch`
    pub is_pinching: bool,

    /// Mirrored cursor from the latest detection
    pub hand_position: Vec2,
    /// Pinch-drag reference point
    pub last_hand_position: Vec2,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            target_rotation: INITIAL_TARGET_ROTATION,
            scale: 1.0,
            target_scale: 1.0,
            gesture: GestureType::Idle,
            is_pinching: false,
            hand_position: Vec2::new(0.5, 0.5),
            last_hand_position: Vec2::new(0.5, 0.5),
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the pose back to the starting orientation when a new model is shown
    pub fn reset_for_model(&mut self) {
        self.rotation = Vec2::ZERO;
        self.target_rotation = INITIAL_TARGET_ROTATION;
        self.scale = 1.0;
        self.target_scale = 1.0;
    }

    /// Drop the dynamic gesture fields; pose and targets are kept
    pub fn release_hand(&mut self) {
        self.gesture = GestureType::Idle;
        self.is_pinching = false;
    }

    /// Point the targets at the current pose so smoothing resumes without a jump
    pub fn settle_targets(&mut self) {
        self.target_rotation = self.rotation;
        self.target_scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}
