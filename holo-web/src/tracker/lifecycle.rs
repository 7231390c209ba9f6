//! Camera lifecycle - acquire once, release on every exit path
//!
//! The webcam is the only resource the hand pipeline holds. A `CameraGuard`
//! owns it and releases it on drop, so replacing, stopping or tearing down
//! the session all free the device.

use std::fmt;

/// Anything that holds a capture device open
pub trait CameraDevice {
    /// Stop capture and free the device. Called exactly once.
    fn release(&mut self);
}

/// Where the camera is in its lifecycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraStatus {
    /// Never requested, or stopped
    Idle,
    /// Waiting on the browser permission prompt / device open
    Initializing,
    Ready,
    /// Acquisition failed; hand tracking is unavailable but the globe still renders
    Unavailable(String),
}

impl Default for CameraStatus {
    fn default() -> Self {
        CameraStatus::Idle
    }
}

impl CameraStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CameraStatus::Ready)
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraStatus::Idle => write!(f, "CAMERA OFF"),
            CameraStatus::Initializing => write!(f, "INITIALIZING CAM..."),
            CameraStatus::Ready => write!(f, "CAMERA READY"),
            CameraStatus::Unavailable(reason) => write!(f, "CAMERA NOT READY: {}", reason),
        }
    }
}

/// Errors from camera acquisition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraError {
    NoWindow,
    NoMediaDevices,
    NoVideoElement(String),
    PermissionDenied(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoWindow => write!(f, "No window found"),
            CameraError::NoMediaDevices => write!(f, "navigator.mediaDevices unavailable"),
            CameraError::NoVideoElement(id) => write!(f, "No video element with id '{}' found", id),
            CameraError::PermissionDenied(e) => write!(f, "Camera access failed: {}", e),
        }
    }
}

/// Owns an open camera; releases it when dropped
pub struct CameraGuard<D: CameraDevice> {
    device: Option<D>,
}

impl<D: CameraDevice> CameraGuard<D> {
    pub fn new(device: D) -> Self {
        Self { device: Some(device) }
    }

    pub fn device(&self) -> Option<&D> {
        self.device.as_ref()
    }

    /// Release now instead of at drop
    pub fn release(&mut self) {
        if let Some(mut device) = self.device.take() {
            device.release();
        }
    }
}

impl<D: CameraDevice> Drop for CameraGuard<D> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Camera slot for one session: status plus the guard, if any.
///
/// Opening a camera is asynchronous, so every `begin` hands out a request
/// number. Only the latest request may complete; anything older that
/// resolves late is released on arrival.
pub struct CameraSlot<D: CameraDevice> {
    status: CameraStatus,
    guard: Option<CameraGuard<D>>,
    request: u64,
}

impl<D: CameraDevice> Default for CameraSlot<D> {
    fn default() -> Self {
        Self {
            status: CameraStatus::Idle,
            guard: None,
            request: 0,
        }
    }
}

impl<D: CameraDevice> CameraSlot<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &CameraStatus {
        &self.status
    }

    /// Acquisition started; any previous device is released first.
    /// Returns the request number to pass to `finish` / `fail`.
    pub fn begin(&mut self) -> u64 {
        self.guard = None;
        self.request += 1;
        self.status = CameraStatus::Initializing;
        self.request
    }

    /// True while `request` is the pending acquisition
    pub fn is_current(&self, request: u64) -> bool {
        self.status == CameraStatus::Initializing && self.request == request
    }

    fn ready(&mut self, device: D) {
        self.guard = Some(CameraGuard::new(device));
        self.status = CameraStatus::Ready;
    }

    /// Acquisition `request` opened `device`. Kept only if it is still the
    /// pending request; otherwise released and false is returned.
    pub fn finish(&mut self, request: u64, device: D) -> bool {
        if !self.is_current(request) {
            CameraGuard::new(device).release();
            return false;
        }
        self.ready(device);
        true
    }

    /// Acquisition `request` failed. Ignored if a newer request or a stop
    /// superseded it.
    pub fn fail(&mut self, request: u64, err: &CameraError) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.guard = None;
        self.status = CameraStatus::Unavailable(err.to_string());
        true
    }

    /// Explicit stop; also cancels any pending request
    pub fn stop(&mut self) {
        self.guard = None;
        self.request += 1;
        self.status = CameraStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeCamera {
        id: u32,
        releases: Rc<Cell<u32>>,
        last_released: Rc<Cell<u32>>,
    }

    impl CameraDevice for FakeCamera {
        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
            self.last_released.set(self.id);
        }
    }

    fn fake() -> (FakeCamera, Rc<Cell<u32>>) {
        let releases = Rc::new(Cell::new(0));
        let cam = FakeCamera { id: 0, releases: releases.clone(), last_released: Rc::new(Cell::new(0)) };
        (cam, releases)
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let (cam, releases) = fake();
        {
            let _guard = CameraGuard::new(cam);
            assert_eq!(releases.get(), 0);
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_explicit_release_is_not_repeated() {
        let (cam, releases) = fake();
        let mut guard = CameraGuard::new(cam);
        guard.release();
        guard.release();
        assert!(guard.device().is_none());
        drop(guard);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_slot_lifecycle() {
        let mut slot: CameraSlot<FakeCamera> = CameraSlot::new();
        assert_eq!(slot.status(), &CameraStatus::Idle);

        let request = slot.begin();
        assert_eq!(slot.status(), &CameraStatus::Initializing);

        let (cam, releases) = fake();
        assert!(slot.finish(request, cam));
        assert!(slot.status().is_ready());

        slot.stop();
        assert_eq!(slot.status(), &CameraStatus::Idle);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_restart_releases_previous_device() {
        let mut slot = CameraSlot::new();
        let (first, first_releases) = fake();
        let request = slot.begin();
        slot.finish(request, first);

        let request = slot.begin();
        assert_eq!(first_releases.get(), 1);

        let (second, second_releases) = fake();
        assert!(slot.finish(request, second));
        drop(slot);
        assert_eq!(second_releases.get(), 1);
    }

    #[test]
    fn test_stop_while_initializing_discards_late_device() {
        let mut slot = CameraSlot::new();
        let request = slot.begin();
        slot.stop();

        let (late, releases) = fake();
        assert!(!slot.finish(request, late));
        assert_eq!(releases.get(), 1);
        assert_eq!(slot.status(), &CameraStatus::Idle);
    }

    #[test]
    fn test_finish_accepts_pending_request() {
        let mut slot = CameraSlot::new();
        let request = slot.begin();
        let (cam, releases) = fake();
        assert!(slot.finish(request, cam));
        assert!(slot.status().is_ready());
        assert_eq!(releases.get(), 0);
    }

    #[test]
    fn test_overlapping_requests_keep_newest() {
        let releases = Rc::new(Cell::new(0));
        let last_released = Rc::new(Cell::new(0));
        let cam = |id| FakeCamera { id, releases: releases.clone(), last_released: last_released.clone() };

        let mut slot = CameraSlot::new();
        let first = slot.begin();
        slot.stop();
        let second = slot.begin();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));

        // First request resolves late
        assert!(!slot.finish(first, cam(1)));
        assert_eq!(last_released.get(), 1);
        assert_eq!(slot.status(), &CameraStatus::Initializing);

        assert!(slot.finish(second, cam(2)));
        assert!(slot.status().is_ready());
        assert_eq!(releases.get(), 1);

        drop(slot);
        assert_eq!(last_released.get(), 2);
    }

    #[test]
    fn test_double_start_keeps_newest() {
        let releases = Rc::new(Cell::new(0));
        let last_released = Rc::new(Cell::new(0));
        let cam = |id| FakeCamera { id, releases: releases.clone(), last_released: last_released.clone() };

        let mut slot = CameraSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.finish(second, cam(2)));
        assert!(!slot.finish(first, cam(1)));
        assert_eq!(last_released.get(), 1);
        assert!(slot.status().is_ready());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_stale_failure_does_not_override() {
        let mut slot: CameraSlot<FakeCamera> = CameraSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.fail(first, &CameraError::NoMediaDevices));
        assert_eq!(slot.status(), &CameraStatus::Initializing);

        let (cam, _) = fake();
        assert!(slot.finish(second, cam));
        assert!(slot.status().is_ready());
    }

    #[test]
    fn test_failure_is_visible_not_fatal() {
        let mut slot: CameraSlot<FakeCamera> = CameraSlot::new();
        let request = slot.begin();
        assert!(slot.fail(request, &CameraError::PermissionDenied("NotAllowedError".into())));

        assert!(!slot.status().is_ready());
        let text = slot.status().to_string();
        assert!(text.starts_with("CAMERA NOT READY"));
        assert!(text.contains("NotAllowedError"));
    }
}
