use serde::{Deserialize, Serialize};
use crate::error::NavError;

const NAVIGATION_JSON: &str = include_str!("../data/navigation.json");

/// Tunables for the walking simulation shared by map and AR navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_ms: u32,
    pub start_distance: f64,
    pub decrement_per_tick: f64,
    /// Each threshold the remaining distance drops below advances the step by one
    pub step_thresholds: Vec<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            start_distance: 100.0,
            decrement_per_tick: 2.0,
            step_thresholds: vec![80.0, 50.0, 20.0],
        }
    }
}

/// A transient caution shown while the remaining distance is strictly inside `(min, max)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningWindow {
    pub text: String,
    pub min: f64,
    pub max: f64,
    /// Screen anchor as fractions of the viewport, measured from the left and bottom edges
    pub anchor: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArConfig {
    pub scale_x: f64,
    pub scale_y: f64,
    pub jitter: f64,
    pub edge_inset: f64,
    /// Space kept free above the bottom control bar
    pub bottom_reserved: f64,
    pub marker_spacing: f64,
    pub marker_decay: f64,
    pub heading_jitter: f64,
    pub seed: u64,
    pub warnings: Vec<WarningWindow>,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            scale_x: 0.8,
            scale_y: 0.6,
            jitter: 20.0,
            edge_inset: 60.0,
            bottom_reserved: 150.0,
            marker_spacing: 30.0,
            marker_decay: 2.0,
            heading_jitter: 5.0,
            seed: 0x5EED_CAFE,
            warnings: vec![
                WarningWindow {
                    text: "Caution: Slippery Floor".to_string(),
                    min: 65.0,
                    max: 70.0,
                    anchor: (0.25, 0.5),
                },
                WarningWindow {
                    text: "Caution: Crowd Ahead".to_string(),
                    min: 35.0,
                    max: 40.0,
                    anchor: (0.75, 0.33),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub simulation: SimulationConfig,
    pub ar: ArConfig,
}

impl NavigationConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded tunables, or the defaults if they fail to parse
    #[must_use]
    pub fn load() -> Self {
        Self::from_json(NAVIGATION_JSON).unwrap_or_else(|err| {
            leptos::logging::warn!("Ignoring navigation config: {}", err);
            Self::default()
        })
    }
}
