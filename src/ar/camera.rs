use crate::error::NavError;
use crate::logging::log;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

const CAMERA_ACCESS_FAILED: &str = "Could not access camera. Please check permissions.";
const AUTOPLAY_BLOCKED: &str = "Could not start camera stream. Autoplay may be blocked by your browser.";

/// Exclusive handle to the rear camera.
///
/// Every track is stopped when the handle is dropped, so whichever exit path
/// the owning view takes the camera is released.
pub struct CameraStream {
    stream: MediaStream,
}

impl CameraStream {
    #[must_use]
    pub fn media(&self) -> &MediaStream {
        &self.stream
    }

    pub fn release(self) {}
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        let tracks = self.stream.get_tracks();
        for track in tracks.iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        log!("Camera released ({} tracks)", tracks.length());
    }
}

/// Whether the browser exposes `navigator.mediaDevices` at all
#[must_use]
pub fn camera_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("mediaDevices"))
        .map(|devices| !devices.is_undefined() && !devices.is_null())
        .unwrap_or(false)
}

fn classify(err: &JsValue) -> NavError {
    match err.dyn_ref::<DomException>() {
        Some(exception) => NavError::from_dom_exception(&exception.name(), &exception.message()),
        None => NavError::TransientAcquisitionFailure(CAMERA_ACCESS_FAILED.to_string()),
    }
}

/// Request the environment-facing camera.
///
/// # Errors
///
/// `DeviceUnsupported` when there is no media API or matching device,
/// `PermissionDenied` when the user refuses, otherwise a transient failure.
pub async fn acquire_camera() -> Result<CameraStream, NavError> {
    if !camera_available() {
        return Err(NavError::DeviceUnsupported(
            "AR is not supported on this device. Camera access is not available.".to_string(),
        ));
    }
    let window = web_sys::window()
        .ok_or_else(|| NavError::DeviceUnsupported("No window".to_string()))?;
    let devices = window.navigator().media_devices().map_err(|e| classify(&e))?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into())
        .map_err(|e| classify(&e))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| classify(&e))?;
    let stream = JsFuture::from(promise).await.map_err(|e| {
        leptos::logging::error!("Error accessing camera: {:?}", e);
        classify(&e)
    })?;
    let stream = stream
        .dyn_into::<MediaStream>()
        .map_err(|_| NavError::TransientAcquisitionFailure(CAMERA_ACCESS_FAILED.to_string()))?;

    log!("Camera acquired");
    Ok(CameraStream { stream })
}

/// Attach the stream to `video` and wait for playback to begin
///
/// # Errors
///
/// Returns a transient failure when the browser refuses to autoplay
pub async fn play_stream(video: &HtmlVideoElement, camera: &CameraStream) -> Result<(), NavError> {
    video.set_src_object(Some(camera.media()));
    let autoplay_blocked = |e: JsValue| {
        leptos::logging::error!("Error playing video: {:?}", e);
        NavError::TransientAcquisitionFailure(AUTOPLAY_BLOCKED.to_string())
    };
    let promise = video.play().map_err(autoplay_blocked)?;
    JsFuture::from(promise).await.map_err(autoplay_blocked)?;
    Ok(())
}

/// Detach any stream from `video` without stopping it
pub fn detach(video: &HtmlVideoElement) {
    video.set_src_object(None);
}
