//! Webcam acquisition for the hand tracker
//!
//! The page owns the `<video>` element and the MediaPipe instance; this
//! module opens the stream, attaches it, and keeps it in the session's
//! camera slot so stop / restart / teardown all release the tracks.

use wasm_bindgen::prelude::*;

use super::session::with_session;
use crate::tracker::CameraError;

impl From<CameraError> for JsValue {
    fn from(err: CameraError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::MediaStreamCamera;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::{spawn_local, JsFuture};
    use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

    use crate::tracker::{CameraDevice, CameraError};

    /// An open `getUserMedia` stream plus the element that shows it
    pub(crate) struct MediaStreamCamera {
        stream: MediaStream,
        video: HtmlVideoElement,
    }

    impl MediaStreamCamera {
        /// Show the stream in its `<video>` and start playback
        pub(crate) fn attach(&self) {
            self.video.set_src_object(Some(&self.stream));
            let playing = match self.video.play() {
                Ok(promise) => JsFuture::from(promise),
                Err(e) => {
                    console_warn!("⚠️ video.play() threw: {:?}", e);
                    return;
                }
            };
            spawn_local(async move {
                // Rejected when the page has not had a user gesture yet;
                // MediaPipe's Camera helper retries playback itself.
                if let Err(e) = playing.await {
                    console_warn!("⚠️ video.play() rejected: {:?}", e);
                }
            });
        }
    }

    impl CameraDevice for MediaStreamCamera {
        fn release(&mut self) {
            for track in self.stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
            // A newer stream may already own the element
            if self.video.src_object().as_ref() == Some(&self.stream) {
                self.video.set_src_object(None);
            }
        }
    }

    fn find_video(video_id: &str) -> Result<HtmlVideoElement, CameraError> {
        let window = web_sys::window().ok_or(CameraError::NoWindow)?;
        let document = window.document().ok_or(CameraError::NoWindow)?;
        document
            .get_element_by_id(video_id)
            .ok_or_else(|| CameraError::NoVideoElement(video_id.to_owned()))?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| CameraError::NoVideoElement(video_id.to_owned()))
    }

    /// Ask for a video-only stream for `video_id`. Not attached yet.
    pub(crate) async fn open(video_id: &str) -> Result<MediaStreamCamera, CameraError> {
        let video = find_video(video_id)?;
        let window = web_sys::window().ok_or(CameraError::NoWindow)?;
        let media_devices = window
            .navigator()
            .media_devices()
            .map_err(|_| CameraError::NoMediaDevices)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&wasm_bindgen::JsValue::TRUE);
        constraints.set_audio(&wasm_bindgen::JsValue::FALSE);

        let promise = media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| CameraError::PermissionDenied(format!("{:?}", e)))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| CameraError::PermissionDenied(format!("{:?}", e)))?
            .dyn_into::<MediaStream>()
            .map_err(|_| CameraError::PermissionDenied("not a MediaStream".into()))?;

        Ok(MediaStreamCamera { stream, video })
    }
}

// ============================================================================
// WASM API
// ============================================================================

/// Open the webcam and attach it to the `<video>` with id `video_id`.
///
/// On failure the status reads "CAMERA NOT READY: ..." and the globe keeps
/// rendering without hand input. A request overtaken by `stop_camera` or a
/// newer `start_camera` resolves Ok and releases its stream.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start_camera(video_id: String) -> Result<(), JsValue> {
    let request = with_session(|session| session.camera_mut().begin());
    console_log!("📷 Requesting camera for #{}", video_id);

    // No session borrow is held across this await
    match browser::open(&video_id).await {
        Ok(camera) => {
            let accepted = with_session(|session| {
                let slot = session.camera_mut();
                if slot.is_current(request) {
                    camera.attach();
                }
                slot.finish(request, camera)
            });
            if accepted {
                console_log!("✅ Camera ready");
            } else {
                console_log!("📷 Camera request #{} superseded, released", request);
            }
            Ok(())
        }
        Err(err) => {
            console_warn!("⚠️ {}", err);
            if with_session(|session| session.camera_mut().fail(request, &err)) {
                Err(err.into())
            } else {
                Ok(())
            }
        }
    }
}

/// Release the webcam. Safe to call when it is not running.
#[wasm_bindgen]
pub fn stop_camera() {
    with_session(|session| session.camera_mut().stop());
    console_log!("📷 Camera stopped");
}

#[wasm_bindgen]
pub fn is_camera_ready() -> bool {
    with_session(|session| session.camera().status().is_ready())
}

#[wasm_bindgen]
pub fn get_camera_status_text() -> String {
    with_session(|session| session.camera().status().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_starts_off() {
        stop_camera();
        assert!(!is_camera_ready());
        assert_eq!(get_camera_status_text(), "CAMERA OFF");
    }
}
