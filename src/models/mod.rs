mod amenity;
mod notification;
mod route;
mod session;
mod station;
mod train;

pub use amenity::{Amenity, AmenityIcon};
pub use notification::Notification;
pub use route::{clamp_index, Difficulty, NavigationRoute, Waypoint, ARRIVED_MESSAGE};
pub use session::{SessionState, UserRole};
pub use station::{Coordinates, CrowdLevel, Platform, QueueInfo, Station, TicketCounter};
pub use train::Train;
