use crate::config::ArConfig;
use crate::models::Waypoint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A waypoint placed over the camera feed
#[derive(Debug, Clone, PartialEq)]
pub struct ArMarker {
    /// 1-based, shown inside the marker
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    /// Simulated metres to this marker
    pub distance: f64,
}

impl ArMarker {
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} ({:.0}m)", self.label, self.distance)
    }
}

/// Projects percentage waypoints into viewport pixels with seeded jitter.
///
/// Two projectors built from the same config produce the same markers and
/// the same heading walk.
#[derive(Debug, Clone)]
pub struct ArProjector {
    config: ArConfig,
    rng: ChaCha8Rng,
}

impl ArProjector {
    #[must_use]
    pub fn new(config: ArConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Restart the pseudo-random sequence from the configured seed
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
    }

    fn jitter(&mut self, amplitude: f64) -> f64 {
        if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..amplitude)
        } else {
            0.0
        }
    }

    /// Place every waypoint inside the safe area of `viewport`.
    ///
    /// The safe area keeps `edge_inset` from every edge and `bottom_reserved`
    /// above the bottom control bar. A viewport too small for the safe area
    /// places markers on the viewport centre line for that axis.
    pub fn project(&mut self, waypoints: &[Waypoint], viewport: Viewport) -> Vec<ArMarker> {
        let inset = self.config.edge_inset;
        let x_range = (inset, viewport.width - inset);
        let y_range = (inset, viewport.height - self.config.bottom_reserved);

        waypoints
            .iter()
            .enumerate()
            .map(|(index, waypoint)| {
                let raw_x = waypoint.x / 100.0 * viewport.width * self.config.scale_x
                    + self.jitter(self.config.jitter);
                let raw_y = waypoint.y / 100.0 * viewport.height * self.config.scale_y
                    + self.jitter(self.config.jitter);

                ArMarker {
                    id: index + 1,
                    x: clamp_or_center(raw_x, x_range, viewport.width / 2.0),
                    y: clamp_or_center(raw_y, y_range, viewport.height / 2.0),
                    label: waypoint.label.clone(),
                    distance: (100.0 - index as f64 * self.config.marker_spacing).max(0.0),
                }
            })
            .collect()
    }

    /// One random-walk step of the simulated compass, in `[0, 360)`
    pub fn next_heading(&mut self, heading: f64) -> f64 {
        let delta = self.jitter(self.config.heading_jitter);
        (heading + delta).rem_euclid(360.0)
    }
}

fn clamp_or_center(value: f64, (low, high): (f64, f64), center: f64) -> f64 {
    if low > high {
        center
    } else {
        value.clamp(low, high)
    }
}

/// Lower every marker distance by `amount`, never below zero
pub fn decay_markers(markers: &mut [ArMarker], amount: f64) {
    for marker in markers {
        marker.distance = (marker.distance - amount).max(0.0);
    }
}
