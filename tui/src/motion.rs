//! Motion Playback
//!
//! Moves a cell along a registered path. A path is an ordered list of
//! waypoints, each reached in a straight line or along a quadratic bezier
//! through a control point. Speed is in cells per tick; the easing curve is
//! applied to overall path progress, so a character accelerates and
//! decelerates across the whole flight rather than per waypoint.

use textfx_core::{Coord, EasingFunction};

/// One stop along a path
#[derive(Debug, Clone, Copy)]
pub struct Waypoint {
    /// The coordinate to reach
    pub target: Coord,
    /// Bezier control point; `None` means a straight segment
    pub control: Option<Coord>,
}

/// A registered, immutable path definition
#[derive(Debug, Clone)]
pub struct PathSpec {
    /// Movement speed in cells per tick
    pub speed: f32,
    /// Easing applied to overall progress
    pub easing: EasingFunction,
    /// Ordered waypoints; empty paths complete immediately
    pub waypoints: Vec<Waypoint>,
}

impl PathSpec {
    /// Create an empty path
    pub fn new(speed: f32, easing: EasingFunction) -> Self {
        Self {
            speed,
            easing,
            waypoints: Vec::new(),
        }
    }
}

fn point_of(coord: Coord) -> (f32, f32) {
    (f32::from(coord.column), f32::from(coord.row))
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

fn lerp(a: (f32, f32), b: (f32, f32), t: f32) -> (f32, f32) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

/// Quadratic bezier through one control point
fn bezier(start: (f32, f32), control: (f32, f32), end: (f32, f32), t: f32) -> (f32, f32) {
    let inv = 1.0 - t;
    (
        inv * inv * start.0 + 2.0 * inv * t * control.0 + t * t * end.0,
        inv * inv * start.1 + 2.0 * inv * t * control.1 + t * t * end.1,
    )
}

/// Approximate segment length; for curved segments, the average of the
/// chord and the control polygon, which is accurate enough for step counts.
fn segment_length(start: (f32, f32), waypoint: &Waypoint) -> f32 {
    let end = point_of(waypoint.target);
    match waypoint.control {
        None => distance(start, end),
        Some(control) => {
            let control = point_of(control);
            let polygon = distance(start, control) + distance(control, end);
            (distance(start, end) + polygon) / 2.0
        }
    }
}

/// Playback state of one activated path
#[derive(Debug, Clone)]
pub struct MotionState {
    start: (f32, f32),
    segment_lengths: Vec<f32>,
    total_length: f32,
    step: u32,
    total_steps: u32,
}

impl MotionState {
    /// Begin playback from the cell's current position.
    ///
    /// The step count is derived from path length and speed so that a
    /// faster path takes fewer ticks over the same distance.
    pub fn begin(spec: &PathSpec, start: (f32, f32)) -> Self {
        let mut segment_lengths = Vec::with_capacity(spec.waypoints.len());
        let mut cursor = start;
        for waypoint in &spec.waypoints {
            segment_lengths.push(segment_length(cursor, waypoint));
            cursor = point_of(waypoint.target);
        }
        let total_length: f32 = segment_lengths.iter().sum();
        let total_steps = if spec.speed > 0.0 {
            ((total_length / spec.speed).ceil() as u32).max(1)
        } else {
            1
        };
        Self {
            start,
            segment_lengths,
            total_length,
            step: 0,
            total_steps,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.step = (self.step + 1).min(self.total_steps);
    }

    /// Whether the final waypoint has been reached
    pub fn is_complete(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Current position along the path
    pub fn position(&self, spec: &PathSpec) -> (f32, f32) {
        let Some(last) = spec.waypoints.last() else {
            return self.start;
        };
        if self.is_complete() || self.total_length <= f32::EPSILON {
            return point_of(last.target);
        }

        let progress = self.step as f32 / self.total_steps as f32;
        let eased = spec.easing.apply(progress);
        let mut remaining = eased * self.total_length;

        let mut cursor = self.start;
        for (waypoint, &length) in spec.waypoints.iter().zip(&self.segment_lengths) {
            let end = point_of(waypoint.target);
            if remaining <= length && length > f32::EPSILON {
                let local = remaining / length;
                return match waypoint.control {
                    None => lerp(cursor, end, local),
                    Some(control) => bezier(cursor, point_of(control), end, local),
                };
            }
            remaining -= length;
            cursor = end;
        }
        point_of(last.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn straight_path(speed: f32, target: Coord) -> PathSpec {
        let mut spec = PathSpec::new(speed, EasingFunction::Linear);
        spec.waypoints.push(Waypoint {
            target,
            control: None,
        });
        spec
    }

    #[test]
    fn test_step_count_scales_with_speed() {
        let spec = straight_path(1.0, Coord::new(10, 0));
        let motion = MotionState::begin(&spec, (0.0, 0.0));
        assert_eq!(motion.total_steps, 10);

        let fast = straight_path(5.0, Coord::new(10, 0));
        let motion = MotionState::begin(&fast, (0.0, 0.0));
        assert_eq!(motion.total_steps, 2);
    }

    #[test]
    fn test_reaches_the_target_exactly() {
        let spec = straight_path(3.0, Coord::new(7, 4));
        let mut motion = MotionState::begin(&spec, (0.0, 0.0));
        while !motion.is_complete() {
            motion.tick();
        }
        assert_eq!(motion.position(&spec), (7.0, 4.0));
    }

    #[test]
    fn test_linear_midpoint() {
        let spec = straight_path(1.0, Coord::new(10, 0));
        let mut motion = MotionState::begin(&spec, (0.0, 0.0));
        for _ in 0..5 {
            motion.tick();
        }
        let (x, y) = motion.position(&spec);
        assert!((x - 5.0).abs() < 1e-4);
        assert!(y.abs() < 1e-4);
    }

    #[test]
    fn test_zero_length_path_completes_in_one_tick() {
        let spec = straight_path(1.0, Coord::new(3, 3));
        let mut motion = MotionState::begin(&spec, (3.0, 3.0));
        assert!(!motion.is_complete());
        motion.tick();
        assert!(motion.is_complete());
        assert_eq!(motion.position(&spec), (3.0, 3.0));
    }

    #[test]
    fn test_empty_path_holds_position() {
        let spec = PathSpec::new(1.0, EasingFunction::Linear);
        let mut motion = MotionState::begin(&spec, (2.0, 2.0));
        motion.tick();
        assert!(motion.is_complete());
        assert_eq!(motion.position(&spec), (2.0, 2.0));
    }

    #[test]
    fn test_curved_segment_bows_toward_control() {
        let mut spec = PathSpec::new(1.0, EasingFunction::Linear);
        spec.waypoints.push(Waypoint {
            target: Coord::new(10, 0),
            control: Some(Coord::new(5, 10)),
        });
        let mut motion = MotionState::begin(&spec, (0.0, 0.0));
        let steps = motion.total_steps;
        for _ in 0..steps / 2 {
            motion.tick();
        }
        let (_, y) = motion.position(&spec);
        assert!(y > 1.0, "midpoint should rise toward the control, got {y}");
    }
}
