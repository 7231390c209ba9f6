//! Session - single owner of everything the JS callbacks share
//!
//! Two callbacks drive it at unrelated rates:
//! - `on_detection` once per MediaPipe result (~30 Hz)
//! - `on_frame` once per requestAnimationFrame (~60 Hz)
//!
//! Each borrows the session for its whole body, so each is atomic with
//! respect to the other.

use std::cell::RefCell;

use crate::gesture::{classify, HandLandmarks};
use crate::globe::{world_rotation, Poi, PoiSelector, POIS};
use crate::interaction::{
    apply_classification, integrate, FrameInput, HandStatus, InteractionMode,
    InteractionState, Vec2,
};
use crate::tracker::{CameraDevice, CameraSlot};

/// Pointer drag reported by the page in classic mode
#[derive(Clone, Copy, Debug, Default)]
struct PointerInput {
    dragging: bool,
    /// Travel since the last frame, canvas-height units
    pending: Vec2,
}

pub struct Session<D: CameraDevice> {
    state: InteractionState,
    mode: InteractionMode,
    status: HandStatus,
    pointer: PointerInput,
    glow: f32,
    pois: &'static [Poi],
    selector: PoiSelector,
    /// Last detected hand, for the skeleton overlay
    hand: Option<HandLandmarks>,
    camera: CameraSlot<D>,
}

impl<D: CameraDevice> Default for Session<D> {
    fn default() -> Self {
        Self::new(&POIS)
    }
}

impl<D: CameraDevice> Session<D> {
    pub fn new(pois: &'static [Poi]) -> Self {
        Self {
            state: InteractionState::new(),
            mode: InteractionMode::default(),
            status: HandStatus::searching(),
            pointer: PointerInput::default(),
            glow: crate::interaction::glow_scale(0.0),
            pois,
            selector: PoiSelector::new(),
            hand: None,
            camera: CameraSlot::new(),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Last published display status
    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn glow(&self) -> f32 {
        self.glow
    }

    pub fn pois(&self) -> &'static [Poi] {
        self.pois
    }

    pub fn active_poi(&self) -> Option<&'static Poi> {
        self.selector.active().and_then(|i| self.pois.get(i))
    }

    pub fn hand(&self) -> Option<&HandLandmarks> {
        self.hand.as_ref()
    }

    pub fn camera(&self) -> &CameraSlot<D> {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraSlot<D> {
        &mut self.camera
    }

    // ------------------------------------------------------------------------
    // Detection cycle
    // ------------------------------------------------------------------------

    /// One landmark provider callback. Returns the status snapshot to publish.
    pub fn on_detection(&mut self, hand: Option<&HandLandmarks>) -> HandStatus {
        if self.mode == InteractionMode::Classic {
            // Hand tracking is off; never let a stale gesture reach the targets
            self.state.release_hand();
            self.status = HandStatus::searching();
            self.hand = None;
            return self.status;
        }

        self.hand = hand.copied();
        let result = classify(hand);
        apply_classification(&mut self.state, &result);
        self.status = HandStatus::project(&self.state, result.detected);
        self.status
    }

    // ------------------------------------------------------------------------
    // Render frame
    // ------------------------------------------------------------------------

    /// One render frame. Returns the newly active POI only when it changed.
    pub fn on_frame(&mut self, time_secs: f64) -> Option<&'static Poi> {
        let drag = (self.mode == InteractionMode::Classic && self.pointer.dragging)
            .then_some(self.pointer.pending);
        self.pointer.pending = Vec2::ZERO;

        let input = FrameInput { time_secs, drag };
        self.glow = integrate(&mut self.state, self.mode, &input);

        let world = world_rotation(self.state.rotation);
        let changed = self.selector.update(self.pois, &world)?;
        self.pois.get(changed)
    }

    // ------------------------------------------------------------------------
    // External controls
    // ------------------------------------------------------------------------

    /// Switch input mode. Returns false if already in `mode`.
    pub fn set_mode(&mut self, mode: InteractionMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;

        match mode {
            InteractionMode::Classic => {
                self.state.release_hand();
                self.status = HandStatus::searching();
                self.hand = None;
                // Hand tracking is torn down with the mode
                self.camera.stop();
            }
            InteractionMode::Gesture => {
                // Classic spin moved the pose away from the old targets
                self.state.settle_targets();
                self.pointer = PointerInput::default();
            }
        }
        true
    }

    /// A new model was picked; restart from the default pose
    pub fn select_model(&mut self) {
        self.state.reset_for_model();
    }

    pub fn set_pointer_dragging(&mut self, dragging: bool) {
        self.pointer.dragging = dragging;
        if !dragging {
            self.pointer.pending = Vec2::ZERO;
        }
    }

    /// Accumulate pointer travel; ignored unless a drag is in progress
    pub fn add_pointer_delta(&mut self, dx: f32, dy: f32) {
        if self.pointer.dragging {
            self.pointer.pending = self.pointer.pending + Vec2::new(dx, dy);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) type BrowserSession = Session<super::camera::MediaStreamCamera>;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) type BrowserSession = Session<NoCamera>;

/// Placeholder device for native builds, where there is no browser camera
#[cfg(not(target_arch = "wasm32"))]
pub(crate) struct NoCamera;

#[cfg(not(target_arch = "wasm32"))]
impl CameraDevice for NoCamera {
    fn release(&mut self) {}
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<BrowserSession> = RefCell::new(BrowserSession::default());
}

/// Borrow the session mutably for one callback
pub(crate) fn with_session<R>(f: impl FnOnce(&mut BrowserSession) -> R) -> R {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}
