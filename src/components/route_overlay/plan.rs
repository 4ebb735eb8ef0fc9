use crate::geometry::{midpoint, segment_angle};
use crate::models::{clamp_index, Waypoint};

/// How far along the route the overlay shows the traveller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteProgress {
    /// Whole route in one colour, no progress shown
    Plain,
    NotStarted,
    AtStep(usize),
}

impl RouteProgress {
    #[must_use]
    pub fn from_step(step: Option<usize>) -> Self {
        step.map_or(RouteProgress::NotStarted, RouteProgress::AtStep)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowTone {
    Neutral,
    Behind,
    Ahead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
    Active,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteArrow {
    pub segment: usize,
    pub at: (f64, f64),
    pub angle: f64,
    pub tone: ArrowTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteMarker {
    pub index: usize,
    pub center: (f64, f64),
    pub role: MarkerRole,
    pub label: String,
}

impl RouteMarker {
    /// 1-based number drawn inside the marker
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Pixel-space drawing plan for a route overlay.
///
/// `completed` runs from the first waypoint to the active one and `remaining`
/// from the active one to the last, so the two share the active waypoint.
/// Routes with fewer than two waypoints have no path and no arrows.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub progress: RouteProgress,
    pub completed: Vec<(f64, f64)>,
    pub remaining: Vec<(f64, f64)>,
    pub arrows: Vec<RouteArrow>,
    pub markers: Vec<RouteMarker>,
}

impl RoutePlan {
    /// Lay out `waypoints` on a surface of `size` pixels.
    ///
    /// A step past the last waypoint is clamped onto it.
    #[must_use]
    pub fn build(waypoints: &[Waypoint], size: (f64, f64), progress: RouteProgress) -> Self {
        let points: Vec<(f64, f64)> = waypoints.iter().map(|w| w.to_pixels(size)).collect();

        let progress = match progress {
            RouteProgress::AtStep(step) => match clamp_index(step, points.len()) {
                Some(active) => RouteProgress::AtStep(active),
                None => RouteProgress::NotStarted,
            },
            other => other,
        };
        let active = match progress {
            RouteProgress::AtStep(active) => Some(active),
            _ => None,
        };

        let (completed, remaining) = if points.len() < 2 {
            (Vec::new(), Vec::new())
        } else {
            match progress {
                RouteProgress::Plain => (points.clone(), Vec::new()),
                RouteProgress::NotStarted => (Vec::new(), points.clone()),
                RouteProgress::AtStep(i) => (points[..=i].to_vec(), points[i..].to_vec()),
            }
        };

        let arrows = points
            .windows(2)
            .enumerate()
            .map(|(segment, pair)| RouteArrow {
                segment,
                at: midpoint(pair[0], pair[1]),
                angle: segment_angle(pair[0], pair[1]),
                tone: match progress {
                    RouteProgress::Plain => ArrowTone::Neutral,
                    RouteProgress::NotStarted => ArrowTone::Ahead,
                    RouteProgress::AtStep(i) if segment < i => ArrowTone::Behind,
                    RouteProgress::AtStep(_) => ArrowTone::Ahead,
                },
            })
            .collect();

        let last = points.len().saturating_sub(1);
        let markers = waypoints
            .iter()
            .zip(&points)
            .enumerate()
            .map(|(index, (waypoint, &center))| RouteMarker {
                index,
                center,
                role: if Some(index) == active {
                    MarkerRole::Active
                } else if index == 0 {
                    MarkerRole::Start
                } else if index == last {
                    MarkerRole::End
                } else {
                    MarkerRole::Default
                },
                label: waypoint.label.clone(),
            })
            .collect();

        Self {
            progress,
            completed,
            remaining,
            arrows,
            markers,
        }
    }

    #[must_use]
    pub fn active_marker(&self) -> Option<&RouteMarker> {
        self.markers.iter().find(|m| m.role == MarkerRole::Active)
    }
}
