use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Not supported on this device: {0}")]
    DeviceUnsupported(String),
    #[error("{0}")]
    TransientAcquisitionFailure(String),
    #[error("Station not found: {0}")]
    StationNotFound(String),
    #[error("Route not found: {route_id} at {station_id}")]
    RouteNotFound { station_id: String, route_id: String },
    #[error("Amenity not found: {amenity_id} at {station_id}")]
    AmenityNotFound { station_id: String, amenity_id: String },
    #[error("Seed data error: {0}")]
    SeedData(String),
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::SeedData(err.to_string())
    }
}

impl NavError {
    /// Classify a failed browser media/geolocation request by its DOM exception name
    #[must_use]
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                NavError::PermissionDenied(message.to_string())
            }
            "NotFoundError" | "OverconstrainedError" | "NotSupportedError" | "TypeError" => {
                NavError::DeviceUnsupported(message.to_string())
            }
            _ => NavError::TransientAcquisitionFailure(message.to_string()),
        }
    }

    /// Errors that keep the view on its fallback for the rest of the session
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self, NavError::DeviceUnsupported(_))
    }

    /// Missing station/route/amenity ids render a "not found" view
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NavError::StationNotFound(_) | NavError::RouteNotFound { .. } | NavError::AmenityNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = NavError::from_dom_exception("NotAllowedError", "Permission denied");
        assert!(matches!(err, NavError::PermissionDenied(_)));
        assert!(!err.is_permanent());
    }

    #[test]
    fn test_classify_unsupported() {
        let err = NavError::from_dom_exception("NotFoundError", "Requested device not found");
        assert!(matches!(err, NavError::DeviceUnsupported(_)));
        assert!(err.is_permanent());
    }

    #[test]
    fn test_classify_unknown_is_transient() {
        let err = NavError::from_dom_exception("AbortError", "Autoplay blocked");
        assert_eq!(err, NavError::TransientAcquisitionFailure("Autoplay blocked".to_string()));
        assert_eq!(err.to_string(), "Autoplay blocked");
    }

    #[test]
    fn test_not_found_display() {
        let err = NavError::RouteNotFound {
            station_id: "central".to_string(),
            route_id: "central-lounge".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Route not found: central-lounge at central");
    }

    #[test]
    fn test_from_json_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: NavError = result.expect_err("invalid json").into();
        assert!(matches!(err, NavError::SeedData(_)));
    }
}
