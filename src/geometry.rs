/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the rectangle lies inside `[0, width] x [0, height]`.
    ///
    /// A small epsilon absorbs rounding in fractional layouts.
    #[must_use]
    pub fn within(&self, width: f64, height: f64) -> bool {
        const EPSILON: f64 = 1e-9;
        self.x >= -EPSILON
            && self.y >= -EPSILON
            && self.right() <= width + EPSILON
            && self.bottom() <= height + EPSILON
    }
}

#[must_use]
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Direction of travel from `a` to `b` in radians, as `atan2(dy, dx)`
#[must_use]
pub fn segment_angle(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.1 - a.1).atan2(b.0 - a.0)
}

/// Vertices of an arrowhead centred on `center` and pointing along `angle`.
///
/// The first point is the tip; the other two are the trailing corners.
#[must_use]
pub fn arrowhead(center: (f64, f64), angle: f64, length: f64, half_width: f64) -> [(f64, f64); 3] {
    let (sin, cos) = angle.sin_cos();
    let rotate = |dx: f64, dy: f64| (center.0 + dx * cos - dy * sin, center.1 + dx * sin + dy * cos);
    let half = length / 2.0;
    [
        rotate(half, 0.0),
        rotate(-half, -half_width),
        rotate(-half, half_width),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint((0.0, 0.0), (10.0, 20.0)), (5.0, 10.0));
    }

    #[test]
    fn test_segment_angle() {
        assert_eq!(segment_angle((0.0, 0.0), (1.0, 0.0)), 0.0);
        assert!((segment_angle((0.0, 0.0), (0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((segment_angle((0.0, 0.0), (-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_arrowhead_points_along_angle() {
        let [tip, left, right] = arrowhead((10.0, 10.0), 0.0, 12.0, 4.0);
        assert!(close(tip, (16.0, 10.0)));
        assert!(close(left, (4.0, 6.0)));
        assert!(close(right, (4.0, 14.0)));

        let [tip, _, _] = arrowhead((0.0, 0.0), FRAC_PI_2, 12.0, 4.0);
        assert!(close(tip, (0.0, 6.0)));
    }

    #[test]
    fn test_rect_within() {
        assert!(Rect::new(0.0, 0.0, 100.0, 50.0).within(100.0, 50.0));
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).within(100.0, 50.0));
        assert!(!Rect::new(95.0, 0.0, 10.0, 10.0).within(100.0, 50.0));
    }
}
