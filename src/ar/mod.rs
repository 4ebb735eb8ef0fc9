pub mod camera;
pub mod projector;
pub mod session;

pub use camera::{acquire_camera, camera_available, play_stream, CameraStream};
pub use projector::{decay_markers, ArMarker, ArProjector, Viewport};
pub use session::{
    fallback_href, ArAvailability, ArFrame, ArSession, ArSupportCache, ObstacleWarning, DESTINATION_REACHED,
};
