use serde::{Deserialize, Serialize};

pub const ARRIVED_MESSAGE: &str = "You have arrived at your destination!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A named point of the route in percentage coordinates (0-100) of the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Waypoint {
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: label.into() }
    }

    /// Map percentage coordinates onto a surface of the given pixel size
    #[must_use]
    pub fn to_pixels(&self, (width, height): (f64, f64)) -> (f64, f64) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }
}

/// Clamp a shared step counter into one array's index range.
///
/// `steps` and `waypoints` have independent lengths but are driven by the same
/// counter, so every lookup clamps against its own array. Returns `None` only
/// for an empty array.
#[must_use]
pub fn clamp_index(step: usize, len: usize) -> Option<usize> {
    len.checked_sub(1).map(|last| step.min(last))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRoute {
    pub id: String,
    pub name: String,
    pub steps: Vec<String>,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub waypoints: Vec<Waypoint>,
}

impl NavigationRoute {
    /// Highest index the step counter may reach
    #[must_use]
    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    #[must_use]
    pub fn step_text(&self, step: usize) -> Option<&str> {
        clamp_index(step, self.steps.len()).map(|i| self.steps[i].as_str())
    }

    #[must_use]
    pub fn waypoint_index(&self, step: usize) -> Option<usize> {
        clamp_index(step, self.waypoints.len())
    }

    /// Instruction following `step`, or the arrival message after the last one
    #[must_use]
    pub fn next_direction(&self, step: usize) -> String {
        step.checked_add(1)
            .and_then(|next| self.steps.get(next))
            .cloned()
            .unwrap_or_else(|| ARRIVED_MESSAGE.to_string())
    }
}
