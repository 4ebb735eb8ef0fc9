#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;
pub mod error;
pub mod config;
pub mod models;
pub mod data;
pub mod geometry;
pub mod locator;
pub mod geolocation;
pub mod navigation;
pub mod ar;
pub mod components;

pub use components::app::App;
