pub mod layout;
pub mod renderer;

pub use layout::{MapVariant, Region, RegionKind, StationLayout, TextLabel};
pub use renderer::draw_station_map;
