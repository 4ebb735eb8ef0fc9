use leptos::{create_rw_signal, RwSignal, SignalGetUntracked, SignalSet};
use crate::config::ArConfig;
use crate::error::NavError;
use crate::models::{clamp_index, NavigationRoute};
use crate::navigation::{Generation, ProgressSnapshot, ProgressSource};
use super::projector::{decay_markers, ArMarker, ArProjector, Viewport};

pub const DESTINATION_REACHED: &str = "Destination reached";

/// Link target for the map-based fallback of an AR route
#[must_use]
pub fn fallback_href(station_id: &str, route_id: &str) -> String {
    format!("/navigation/{station_id}/{route_id}")
}

/// View state of the AR screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArAvailability {
    /// Camera support not checked yet
    Unknown,
    /// Camera API present, session not started
    Ready,
    /// Camera requested, waiting on the permission prompt
    Acquiring,
    Active,
    Unsupported(NavError),
}

impl ArAvailability {
    #[must_use]
    pub fn from_camera_check(camera_available: bool) -> Self {
        if camera_available {
            ArAvailability::Ready
        } else {
            ArAvailability::Unsupported(NavError::DeviceUnsupported(
                "AR is not supported on this device. Camera access is not available.".to_string(),
            ))
        }
    }

    /// State on mount: a failure cached earlier in the session wins over a fresh camera check
    #[must_use]
    pub fn initial(cached: Option<NavError>, camera_available: bool) -> Self {
        match cached {
            Some(error) => ArAvailability::Unsupported(error),
            None => ArAvailability::from_camera_check(camera_available),
        }
    }

    /// Only one camera request may be in flight
    #[must_use]
    pub fn can_start(&self) -> bool {
        *self == ArAvailability::Ready
    }

    /// The fallback may offer a retry only for failures the user can fix by starting again
    #[must_use]
    pub fn can_retry(&self) -> bool {
        match self {
            ArAvailability::Unsupported(err) => matches!(err, NavError::TransientAcquisitionFailure(_)),
            _ => false,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            ArAvailability::Unsupported(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Permanent AR failures, remembered for the rest of the browsing session
#[derive(Debug, Clone, Copy)]
pub struct ArSupportCache(RwSignal<Option<NavError>>);

impl Default for ArSupportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ArSupportCache {
    #[must_use]
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn record(&self, error: &NavError) {
        if error.is_permanent() {
            self.0.set(Some(error.clone()));
        }
    }

    #[must_use]
    pub fn cached(&self) -> Option<NavError> {
        self.0.get_untracked()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleWarning {
    pub text: String,
    /// Fractions of the viewport from the left and bottom edges
    pub anchor: (f64, f64),
}

/// Everything the AR overlay draws for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct ArFrame {
    pub progress: ProgressSnapshot,
    pub markers: Vec<ArMarker>,
    pub heading: f64,
    pub warnings: Vec<ObstacleWarning>,
    pub direction: Option<String>,
    pub next_line: String,
}

/// One AR traversal of a route.
///
/// Step progression, marker decay, compass walk and obstacle warnings all
/// advance from the same tick, so they can never drift apart.
pub struct ArSession<P: ProgressSource> {
    source: P,
    projector: ArProjector,
    config: ArConfig,
    route: NavigationRoute,
    markers: Vec<ArMarker>,
    heading: f64,
    generation: Generation,
}

impl<P: ProgressSource> ArSession<P> {
    #[must_use]
    pub fn new(source: P, config: ArConfig, route: NavigationRoute) -> Self {
        Self {
            source,
            projector: ArProjector::new(config.clone()),
            config,
            route,
            markers: Vec::new(),
            heading: 0.0,
            generation: 0,
        }
    }

    #[must_use]
    pub fn route(&self) -> &NavigationRoute {
        &self.route
    }

    /// Lay out markers for `viewport` and start progression
    pub fn start(&mut self, viewport: Viewport) -> Generation {
        self.projector.reseed();
        self.markers = self.projector.project(&self.route.waypoints, viewport);
        self.heading = 0.0;
        self.generation = self.source.start();
        self.generation
    }

    pub fn stop(&mut self) {
        self.source.stop();
        self.markers.clear();
    }

    pub fn tick(&mut self, generation: Generation) -> Option<ArFrame> {
        if generation != self.generation {
            return None;
        }
        let progress = self.source.on_tick(generation)?;
        decay_markers(&mut self.markers, self.config.marker_decay);
        self.heading = self.projector.next_heading(self.heading);
        Some(self.build_frame(progress))
    }

    #[must_use]
    pub fn frame(&self) -> ArFrame {
        self.build_frame(self.source.snapshot())
    }

    fn build_frame(&self, progress: ProgressSnapshot) -> ArFrame {
        let warnings = self
            .config
            .warnings
            .iter()
            .filter(|w| progress.distance > w.min && progress.distance < w.max)
            .map(|w| ObstacleWarning {
                text: w.text.clone(),
                anchor: w.anchor,
            })
            .collect();

        let steps = &self.route.steps;
        let next_line = match clamp_index(progress.step, steps.len()) {
            Some(current) if current + 1 < steps.len() => format!("Next: {}", steps[current + 1]),
            _ => DESTINATION_REACHED.to_string(),
        };

        ArFrame {
            direction: progress.current_direction(&self.route).map(str::to_string),
            next_line,
            markers: self.markers.clone(),
            heading: self.heading,
            warnings,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::models::{Difficulty, Waypoint};
    use crate::navigation::{NavState, StepSimulator};

    fn route() -> NavigationRoute {
        NavigationRoute {
            id: "cc-platform".to_string(),
            name: "To Platform 3".to_string(),
            steps: vec![
                "Walk straight".into(),
                "Turn left at the stairs".into(),
                "Cross the bridge".into(),
                "Platform 3 is on your right".into(),
            ],
            estimated_time: "4 minutes".to_string(),
            difficulty: Difficulty::Medium,
            waypoints: vec![
                Waypoint::new(20.0, 80.0, "Entrance"),
                Waypoint::new(50.0, 50.0, "Stairs"),
                Waypoint::new(80.0, 20.0, "Platform 3"),
            ],
        }
    }

    fn session() -> ArSession<StepSimulator> {
        let sim = StepSimulator::for_route(SimulationConfig::default(), &route());
        ArSession::new(sim, ArConfig::default(), route())
    }

    fn run(session: &mut ArSession<StepSimulator>, generation: Generation, ticks: usize) -> ArFrame {
        let mut frame = session.frame();
        for _ in 0..ticks {
            frame = session.tick(generation).expect("session is running");
        }
        frame
    }

    #[test]
    fn test_start_projects_markers() {
        let mut session = session();
        session.start(Viewport::new(400.0, 800.0));
        let frame = session.frame();
        assert_eq!(frame.markers.len(), 3);
        assert_eq!(frame.progress.state, NavState::Running);
        assert_eq!(frame.direction.as_deref(), Some("Walk straight"));
        assert_eq!(frame.next_line, "Next: Turn left at the stairs");
    }

    #[test]
    fn test_tick_decays_markers() {
        let mut session = session();
        let generation = session.start(Viewport::new(400.0, 800.0));
        let frame = run(&mut session, generation, 3);
        let distances: Vec<f64> = frame.markers.iter().map(|m| m.distance).collect();
        assert_eq!(distances, vec![94.0, 64.0, 34.0]);
        assert_eq!(frame.progress.distance, 94.0);
    }

    #[test]
    fn test_warning_windows() {
        let mut session = session();
        let generation = session.start(Viewport::new(400.0, 800.0));

        // 100 - 2*15 = 70 sits on the open boundary
        let frame = run(&mut session, generation, 15);
        assert!(frame.warnings.is_empty());

        let frame = run(&mut session, generation, 1);
        assert_eq!(frame.progress.distance, 68.0);
        assert_eq!(frame.warnings.len(), 1);
        assert_eq!(frame.warnings[0].text, "Caution: Slippery Floor");

        let frame = run(&mut session, generation, 2);
        assert_eq!(frame.progress.distance, 64.0);
        assert!(frame.warnings.is_empty());
    }

    #[test]
    fn test_crowd_warning() {
        let mut session = session();
        let generation = session.start(Viewport::new(400.0, 800.0));
        let frame = run(&mut session, generation, 31);
        assert_eq!(frame.progress.distance, 38.0);
        assert_eq!(frame.warnings[0].text, "Caution: Crowd Ahead");
        assert_eq!(frame.warnings[0].anchor, (0.75, 0.33));
    }

    #[test]
    fn test_arrival_frame() {
        let mut session = session();
        let generation = session.start(Viewport::new(400.0, 800.0));
        let frame = run(&mut session, generation, 50);
        assert!(frame.progress.arrived());
        assert_eq!(frame.direction.as_deref(), Some("Platform 3 is on your right"));
        assert_eq!(frame.next_line, DESTINATION_REACHED);
        assert!(session.tick(generation).is_none());
    }

    #[test]
    fn test_stale_generation_after_restart() {
        let mut session = session();
        let old = session.start(Viewport::new(400.0, 800.0));
        run(&mut session, old, 5);
        let new = session.start(Viewport::new(400.0, 800.0));
        assert!(session.tick(old).is_none());
        let frame = session.tick(new).expect("current generation");
        assert_eq!(frame.progress.distance, 98.0);
    }

    #[test]
    fn test_stop_clears_markers() {
        let mut session = session();
        let generation = session.start(Viewport::new(400.0, 800.0));
        session.stop();
        assert!(session.tick(generation).is_none());
        assert!(session.frame().markers.is_empty());
        assert_eq!(session.frame().progress.state, NavState::Idle);
    }

    #[test]
    fn test_availability() {
        assert_eq!(ArAvailability::from_camera_check(true), ArAvailability::Ready);
        let unsupported = ArAvailability::from_camera_check(false);
        assert!(!unsupported.can_retry());
        assert!(unsupported.error_message().is_some());

        let blocked = ArAvailability::Unsupported(NavError::TransientAcquisitionFailure("blocked".into()));
        assert!(blocked.can_retry());
        assert_eq!(blocked.error_message().as_deref(), Some("blocked"));
    }

    #[test]
    fn test_only_ready_can_start() {
        assert!(ArAvailability::Ready.can_start());
        assert!(!ArAvailability::Unknown.can_start());
        assert!(!ArAvailability::Acquiring.can_start());
        assert!(!ArAvailability::Active.can_start());
        assert!(!ArAvailability::from_camera_check(false).can_start());
    }

    #[test]
    fn test_acquiring_is_not_a_failure() {
        assert!(!ArAvailability::Acquiring.can_retry());
        assert!(ArAvailability::Acquiring.error_message().is_none());
    }

    #[test]
    fn test_initial_prefers_cached_failure() {
        let cached = NavError::DeviceUnsupported("no camera".into());
        let availability = ArAvailability::initial(Some(cached.clone()), true);
        assert_eq!(availability, ArAvailability::Unsupported(cached));
        assert!(!availability.can_start());
        assert!(!availability.can_retry());

        assert_eq!(ArAvailability::initial(None, true), ArAvailability::Ready);
        assert_eq!(ArAvailability::initial(None, false), ArAvailability::from_camera_check(false));
    }

    #[test]
    fn test_empty_route_arrives_on_start() {
        let mut empty = route();
        empty.steps.clear();
        let sim = StepSimulator::for_route(SimulationConfig::default(), &empty);
        let mut session = ArSession::new(sim, ArConfig::default(), empty);
        let generation = session.start(Viewport::new(400.0, 800.0));
        // the view skips the ticker for a session that is already complete
        assert!(session.frame().progress.arrived());
        assert_eq!(session.frame().next_line, DESTINATION_REACHED);
        assert!(session.tick(generation).is_none());
    }

    #[test]
    fn test_fallback_href() {
        assert_eq!(fallback_href("central", "central-platform"), "/navigation/central/central-platform");
    }
}
