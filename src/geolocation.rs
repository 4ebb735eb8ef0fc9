use crate::error::NavError;
use crate::logging::log;
use leptos::{create_effect, Signal, SignalGet, SignalWith};
use leptos_use::{use_geolocation_with_options, UseGeolocationOptions, UseGeolocationReturn};
use web_sys::PositionError;

const LOCATION_TIMEOUT_MS: u32 = 10_000;
const LOCATION_UNAVAILABLE: &str = "Unable to retrieve your location";
const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";

#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationState {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error: Option<NavError>,
    pub loading: bool,
}

impl Default for GeolocationState {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            error: None,
            loading: true,
        }
    }
}

impl GeolocationState {
    fn located(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            error: None,
            loading: false,
        }
    }

    fn failed(self, error: NavError) -> Self {
        Self {
            error: Some(error),
            loading: false,
            ..self
        }
    }
}

/// Map a `PositionError` code onto the error taxonomy
#[must_use]
pub fn classify_position_error(code: u16) -> NavError {
    match code {
        PositionError::PERMISSION_DENIED => NavError::PermissionDenied(LOCATION_UNAVAILABLE.to_string()),
        _ => NavError::TransientAcquisitionFailure(LOCATION_UNAVAILABLE.to_string()),
    }
}

/// Fold the raw watch signals into one state.
///
/// An error keeps the last known coordinates.
#[must_use]
pub fn resolve_state(supported: bool, coords: Option<(f64, f64)>, error_code: Option<u16>) -> GeolocationState {
    if !supported {
        return GeolocationState::default()
            .failed(NavError::DeviceUnsupported(GEOLOCATION_UNSUPPORTED.to_string()));
    }
    let state = match coords {
        Some((latitude, longitude)) => GeolocationState::located(latitude, longitude),
        None => GeolocationState::default(),
    };
    match error_code {
        Some(code) => state.failed(classify_position_error(code)),
        None => state,
    }
}

fn geolocation_supported() -> bool {
    web_sys::window()
        .map(|window| window.navigator())
        .is_some_and(|navigator| js_sys::Reflect::has(&navigator, &"geolocation".into()).unwrap_or(false))
}

/// One-shot position lookup, run once per mount.
///
/// The request carries a timeout, so the state always leaves `loading`.
/// The underlying watch is paused as soon as it does.
#[must_use]
pub fn use_geolocation() -> Signal<GeolocationState> {
    let supported = geolocation_supported();
    let UseGeolocationReturn { coords, error, pause, .. } = use_geolocation_with_options(
        UseGeolocationOptions::default()
            .timeout(LOCATION_TIMEOUT_MS)
            .immediate(supported),
    );

    let location = Signal::derive(move || {
        let coords = coords.with(|c| c.as_ref().map(|c| (c.latitude(), c.longitude())));
        let error_code = error.with(|e| e.as_ref().map(PositionError::code));
        resolve_state(supported, coords, error_code)
    });

    create_effect(move |settled: Option<bool>| {
        if settled == Some(true) {
            return true;
        }
        let state = location.get();
        if state.loading {
            return false;
        }
        if let (Some(lat), Some(lon)) = (state.latitude, state.longitude) {
            log!("Located at {:.4}, {:.4}", lat, lon);
        }
        pause();
        true
    });

    location
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state = GeolocationState::default();
        assert!(state.loading);
        assert!(state.latitude.is_none());
    }

    #[test]
    fn test_failed_keeps_coordinates() {
        let state = GeolocationState::located(13.08, 80.27)
            .failed(NavError::TransientAcquisitionFailure("timeout".to_string()));
        assert!(!state.loading);
        assert_eq!(state.latitude, Some(13.08));
        assert!(state.error.is_some());
    }

    #[test]
    fn test_classify_position_error() {
        assert!(matches!(classify_position_error(1), NavError::PermissionDenied(_)));
        assert!(matches!(classify_position_error(2), NavError::TransientAcquisitionFailure(_)));
        assert!(matches!(classify_position_error(3), NavError::TransientAcquisitionFailure(_)));
    }

    #[test]
    fn test_resolve_waiting() {
        assert_eq!(resolve_state(true, None, None), GeolocationState::default());
    }

    #[test]
    fn test_resolve_located() {
        let state = resolve_state(true, Some((28.64, 77.22)), None);
        assert!(!state.loading);
        assert_eq!((state.latitude, state.longitude), (Some(28.64), Some(77.22)));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_resolve_timeout_settles() {
        let state = resolve_state(true, None, Some(PositionError::TIMEOUT));
        assert!(!state.loading);
        assert!(matches!(state.error, Some(NavError::TransientAcquisitionFailure(_))));
    }

    #[test]
    fn test_resolve_unsupported() {
        let state = resolve_state(false, None, None);
        assert!(!state.loading);
        assert!(matches!(state.error, Some(NavError::DeviceUnsupported(_))));
    }
}
