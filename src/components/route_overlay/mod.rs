pub mod plan;
pub mod renderer;

pub use plan::{ArrowTone, MarkerRole, RouteArrow, RouteMarker, RoutePlan, RouteProgress};
pub use renderer::draw_route;
