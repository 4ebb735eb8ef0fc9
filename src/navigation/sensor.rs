use crate::config::SimulationConfig;
use crate::logging::log;
use super::progress::{step_for_distance, Generation, NavState, ProgressSnapshot, ProgressSource};

/// Progress fed by an external positioning source.
///
/// Readings arrive through `report_distance`; the scheduler tick folds the
/// latest one into the snapshot. The step index never moves backwards, so
/// jitter around a threshold does not flip directions back and forth.
#[derive(Debug, Clone)]
pub struct SensorProgress {
    thresholds: Vec<f64>,
    start_distance: f64,
    step_count: usize,
    state: NavState,
    generation: Generation,
    pending: Option<f64>,
    distance: f64,
    step: usize,
}

impl SensorProgress {
    #[must_use]
    pub fn new(config: &SimulationConfig, step_count: usize) -> Self {
        Self {
            thresholds: config.step_thresholds.clone(),
            start_distance: config.start_distance,
            step_count,
            state: NavState::Idle,
            generation: 0,
            pending: None,
            distance: config.start_distance,
            step: 0,
        }
    }

    /// Record a remaining-distance reading; negative and non-finite values are dropped
    pub fn report_distance(&mut self, remaining: f64) {
        if remaining.is_finite() {
            self.pending = Some(remaining.max(0.0));
        }
    }
}

impl ProgressSource for SensorProgress {
    fn start(&mut self) -> Generation {
        self.generation += 1;
        self.pending = None;
        self.step = 0;

        if self.step_count == 0 {
            self.distance = 0.0;
            self.state = NavState::Completed;
        } else {
            self.distance = self.start_distance;
            self.state = NavState::Running;
        }
        log!("Sensor progress started, generation {}", self.generation);

        self.generation
    }

    fn stop(&mut self) {
        if self.state == NavState::Running {
            self.state = NavState::Idle;
        }
        self.generation += 1;
    }

    fn on_tick(&mut self, generation: Generation) -> Option<ProgressSnapshot> {
        if generation != self.generation || self.state != NavState::Running {
            return None;
        }

        if let Some(reading) = self.pending.take() {
            self.distance = reading;
            let last_step = self.step_count.saturating_sub(1);
            self.step = self.step.max(step_for_distance(&self.thresholds, reading, last_step));
            if reading <= 0.0 {
                self.state = NavState::Completed;
            }
        }

        Some(self.snapshot())
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            state: self.state,
            step: self.step,
            distance: self.distance,
        }
    }
}
