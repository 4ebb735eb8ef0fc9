use crate::config::SimulationConfig;
use crate::logging::log;
use crate::models::NavigationRoute;
use super::progress::{step_for_distance, Generation, NavState, ProgressSnapshot, ProgressSource};

/// Timer-driven stand-in for a positioning feed.
///
/// Each tick lowers the remaining distance by a fixed amount; the step index
/// follows from how many thresholds the distance has dropped below. Everything
/// is derived from the tick count, so replaying the same ticks gives the same
/// snapshots.
#[derive(Debug, Clone)]
pub struct StepSimulator {
    config: SimulationConfig,
    step_count: usize,
    state: NavState,
    generation: Generation,
    ticks: u32,
}

impl StepSimulator {
    #[must_use]
    pub fn new(config: SimulationConfig, step_count: usize) -> Self {
        Self {
            config,
            step_count,
            state: NavState::Idle,
            generation: 0,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn for_route(config: SimulationConfig, route: &NavigationRoute) -> Self {
        Self::new(config, route.steps.len())
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    fn last_step(&self) -> usize {
        self.step_count.saturating_sub(1)
    }

    fn distance_after(&self, ticks: u32) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }
        (self.config.start_distance - f64::from(ticks) * self.config.decrement_per_tick).max(0.0)
    }
}

impl ProgressSource for StepSimulator {
    fn start(&mut self) -> Generation {
        self.generation += 1;
        self.ticks = 0;

        if self.step_count == 0 {
            self.state = NavState::Completed;
            log!("Route has no steps, arrived immediately");
        } else {
            self.state = NavState::Running;
            log!("Simulator started, generation {}", self.generation);
        }

        self.generation
    }

    fn stop(&mut self) {
        if self.state == NavState::Running {
            self.state = NavState::Idle;
            log!("Simulator stopped after {} ticks", self.ticks);
        }
        self.generation += 1;
    }

    fn on_tick(&mut self, generation: Generation) -> Option<ProgressSnapshot> {
        if generation != self.generation || self.state != NavState::Running {
            return None;
        }

        self.ticks = self.ticks.saturating_add(1);
        if self.distance_after(self.ticks) <= 0.0 {
            self.state = NavState::Completed;
            log!("Destination reached after {} ticks", self.ticks);
        }

        Some(self.snapshot())
    }

    fn snapshot(&self) -> ProgressSnapshot {
        let distance = self.distance_after(self.ticks);
        ProgressSnapshot {
            state: self.state,
            step: step_for_distance(&self.config.step_thresholds, distance, self.last_step()),
            distance,
        }
    }
}
