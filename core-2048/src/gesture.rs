//! Swipe classification for single-touch gestures.

use crate::direction::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Picks a direction from the displacement `start - current`.
///
/// The horizontal axis wins only when it is strictly larger; ties go to the
/// vertical axis.
pub fn classify_displacement(diff_x: f64, diff_y: f64) -> Direction {
    if diff_x.abs() > diff_y.abs() {
        if diff_x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if diff_y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Tracks one gesture at a time. Each `start` allows exactly one
/// classification.
#[derive(Debug, Default)]
pub struct GestureTracker {
    initial: Option<Point>,
}

impl GestureTracker {
    pub const fn new() -> Self {
        Self { initial: None }
    }

    /// Records the touch origin. A stale, unclassified origin is overwritten.
    pub fn start(&mut self, point: Point) {
        self.initial = Some(point);
    }

    pub fn cancel(&mut self) {
        self.initial = None;
    }

    pub const fn is_tracking(&self) -> bool {
        self.initial.is_some()
    }

    /// Classifies the gesture against `current` and forgets the origin.
    /// Returns `None` when no gesture was started.
    pub fn classify(&mut self, current: Point) -> Option<Direction> {
        let initial = self.initial.take()?;

        Some(classify_displacement(
            initial.x - current.x,
            initial.y - current.y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f64, f64), to: (f64, f64)) -> Option<Direction> {
        let mut tracker = GestureTracker::new();
        tracker.start(Point::new(from.0, from.1));
        tracker.classify(Point::new(to.0, to.1))
    }

    #[test]
    fn dominant_horizontal_axis() {
        assert_eq!(swipe((100.0, 50.0), (40.0, 60.0)), Some(Direction::Left));
        assert_eq!(swipe((100.0, 50.0), (160.0, 40.0)), Some(Direction::Right));
    }

    #[test]
    fn dominant_vertical_axis() {
        assert_eq!(swipe((50.0, 100.0), (55.0, 20.0)), Some(Direction::Up));
        assert_eq!(swipe((50.0, 100.0), (45.0, 180.0)), Some(Direction::Down));
    }

    #[test]
    fn ties_fall_back_to_vertical() {
        assert_eq!(classify_displacement(10.0, 10.0), Direction::Up);
        assert_eq!(classify_displacement(-10.0, -10.0), Direction::Down);
        assert_eq!(classify_displacement(10.0, -10.0), Direction::Down);
        assert_eq!(classify_displacement(0.0, 0.0), Direction::Down);
    }

    #[test]
    fn sign_grid() {
        let cases = [
            ((5.0, 1.0), Direction::Left),
            ((-5.0, 1.0), Direction::Right),
            ((5.0, -4.9), Direction::Left),
            ((1.0, 5.0), Direction::Up),
            ((1.0, -5.0), Direction::Down),
            ((-4.9, -5.0), Direction::Down),
        ];

        for ((dx, dy), expected) in cases {
            assert_eq!(classify_displacement(dx, dy), expected, "({dx}, {dy})");
        }
    }

    #[test]
    fn classify_without_start_is_none() {
        let mut tracker = GestureTracker::new();

        assert_eq!(tracker.classify(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn one_classification_per_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.start(Point::new(0.0, 0.0));

        assert!(tracker.classify(Point::new(-30.0, 0.0)).is_some());
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.classify(Point::new(-60.0, 0.0)), None);
    }

    #[test]
    fn restart_overwrites_stale_origin() {
        let mut tracker = GestureTracker::new();
        tracker.start(Point::new(0.0, 0.0));
        tracker.start(Point::new(100.0, 0.0));

        assert_eq!(tracker.classify(Point::new(50.0, 0.0)), Some(Direction::Left));
    }

    #[test]
    fn cancel_drops_origin() {
        let mut tracker = GestureTracker::new();
        tracker.start(Point::new(0.0, 0.0));
        tracker.cancel();

        assert_eq!(tracker.classify(Point::new(50.0, 0.0)), None);
    }
}
