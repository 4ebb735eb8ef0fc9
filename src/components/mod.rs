#![allow(clippy::needless_pass_by_value)]

pub mod amenity_card;
pub mod amenity_detail;
pub mod app;
pub mod ar_navigation;
pub mod ar_prompt;
pub mod layout;
pub mod navigation_map;
pub mod navigation_page;
pub mod not_found;
pub mod route_overlay;
pub mod station_detail;
pub mod station_map;
pub mod stations_page;
pub mod status_badge;
pub mod tab_view;
pub mod ticket_queue_card;
pub mod train_card;
