use crate::models::{NavigationRoute, ARRIVED_MESSAGE};

/// Token identifying one traversal; ticks carrying an older token are ignored
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Running,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub state: NavState,
    /// Shared counter into both the step texts and the waypoints
    pub step: usize,
    pub distance: f64,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn idle(start_distance: f64) -> Self {
        Self {
            state: NavState::Idle,
            step: 0,
            distance: start_distance,
        }
    }

    #[must_use]
    pub fn arrived(&self) -> bool {
        self.state == NavState::Completed
    }

    #[must_use]
    pub fn current_direction<'r>(&self, route: &'r NavigationRoute) -> Option<&'r str> {
        route.step_text(self.step)
    }

    #[must_use]
    pub fn next_direction(&self, route: &NavigationRoute) -> String {
        if self.arrived() {
            ARRIVED_MESSAGE.to_string()
        } else {
            route.next_direction(self.step)
        }
    }
}

/// Source of walking progress for a route traversal.
///
/// Renderers only consume `ProgressSnapshot`s, so a simulated source and a
/// sensor-fed source are interchangeable.
pub trait ProgressSource {
    /// Begin (or restart) a traversal and return its generation
    fn start(&mut self) -> Generation;

    /// Return to `Idle`; pending ticks of the current generation become stale
    fn stop(&mut self);

    /// Advance on a scheduler tick. `None` when the tick is stale or the source is not running.
    fn on_tick(&mut self, generation: Generation) -> Option<ProgressSnapshot>;

    fn snapshot(&self) -> ProgressSnapshot;
}

/// Number of thresholds `distance` has dropped below, capped at `last_step`
#[must_use]
pub fn step_for_distance(thresholds: &[f64], distance: f64, last_step: usize) -> usize {
    thresholds
        .iter()
        .filter(|&&t| distance < t)
        .count()
        .min(last_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Waypoint};

    fn route() -> NavigationRoute {
        NavigationRoute {
            id: "r".to_string(),
            name: "To Food Court".to_string(),
            steps: vec!["Exit".into(), "Walk left".into(), "Enter concourse".into()],
            estimated_time: "2 minutes".to_string(),
            difficulty: Difficulty::Easy,
            waypoints: vec![Waypoint::new(30.0, 40.0, "Start")],
        }
    }

    #[test]
    fn test_step_for_distance() {
        let thresholds = [80.0, 50.0, 20.0];
        assert_eq!(step_for_distance(&thresholds, 100.0, 3), 0);
        assert_eq!(step_for_distance(&thresholds, 80.0, 3), 0);
        assert_eq!(step_for_distance(&thresholds, 79.0, 3), 1);
        assert_eq!(step_for_distance(&thresholds, 20.0, 3), 2);
        assert_eq!(step_for_distance(&thresholds, 0.0, 3), 3);
        assert_eq!(step_for_distance(&thresholds, 0.0, 1), 1);
        assert_eq!(step_for_distance(&thresholds, 0.0, 0), 0);
    }

    #[test]
    fn test_directions() {
        let route = route();
        let mut snapshot = ProgressSnapshot::idle(100.0);
        assert_eq!(snapshot.current_direction(&route), Some("Exit"));
        assert_eq!(snapshot.next_direction(&route), "Walk left");

        snapshot.step = 2;
        snapshot.state = NavState::Running;
        assert_eq!(snapshot.next_direction(&route), ARRIVED_MESSAGE);

        snapshot.step = 1;
        snapshot.state = NavState::Completed;
        assert_eq!(snapshot.next_direction(&route), ARRIVED_MESSAGE);
    }
}
