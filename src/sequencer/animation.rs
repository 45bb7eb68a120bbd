//! Frame-driven piece movement.
//!
//! A `MoveAnimation` is the whole state of one piece sliding between two
//! points. The host loop feeds it frame deltas; it reports the interpolated
//! point until the duration has elapsed, then the exact end point.

use serde::{Deserialize, Serialize};

use crate::core::Point3;

/// Progress of an animation after one `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationStatus {
    /// Still moving; the piece is at this point.
    InProgress(Point3),
    /// Done; the piece is exactly on the end point.
    Completed(Point3),
}

impl AnimationStatus {
    #[must_use]
    pub fn point(self) -> Point3 {
        match self {
            AnimationStatus::InProgress(p) | AnimationStatus::Completed(p) => p,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, AnimationStatus::Completed(_))
    }
}

/// Linear move from `start` to `end` at constant speed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveAnimation {
    start: Point3,
    end: Point3,
    elapsed: f32,
    duration: f32,
}

impl MoveAnimation {
    /// Animation covering `start -> end` at `speed` units per second.
    ///
    /// Moves shorter than `snap_epsilon` get a zero duration and complete
    /// on the first `advance`.
    #[must_use]
    pub fn new(start: Point3, end: Point3, speed: f32, snap_epsilon: f32) -> Self {
        let distance = start.distance(end);
        let duration = if distance < snap_epsilon || speed <= 0.0 {
            0.0
        } else {
            distance / speed
        };
        Self {
            start,
            end,
            elapsed: 0.0,
            duration,
        }
    }

    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Total time in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `delta` seconds. Negative deltas count as zero.
    pub fn advance(&mut self, delta: f32) -> AnimationStatus {
        self.elapsed += delta.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            return AnimationStatus::Completed(self.end);
        }
        let fraction = self.elapsed / self.duration;
        AnimationStatus::InProgress(self.start.lerp(self.end, fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_distance_and_speed() {
        let anim = MoveAnimation::new(Point3::ORIGIN, Point3::new(6.0, 0.0, 0.0), 3.0, 0.01);
        assert!((anim.duration() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_progress_then_complete() {
        let end = Point3::new(6.0, 0.0, 0.0);
        let mut anim = MoveAnimation::new(Point3::ORIGIN, end, 3.0, 0.01);

        let status = anim.advance(1.0);
        assert_eq!(status, AnimationStatus::InProgress(Point3::new(3.0, 0.0, 0.0)));

        let status = anim.advance(0.5);
        assert!(!status.is_completed());
        assert!((status.point().x - 4.5).abs() < 1e-5);

        let status = anim.advance(0.75);
        assert_eq!(status, AnimationStatus::Completed(end));
        assert_eq!(anim.elapsed(), anim.duration());
    }

    #[test]
    fn test_completion_snaps_exactly() {
        let end = Point3::new(0.1, 0.7, 0.3);
        let mut anim = MoveAnimation::new(Point3::new(0.3, 0.1, 0.9), end, 0.37, 0.01);

        let mut status = anim.advance(0.0);
        while !status.is_completed() {
            status = anim.advance(1.0 / 60.0);
        }
        assert_eq!(status.point(), end);
    }

    #[test]
    fn test_short_move_snaps_on_first_advance() {
        let end = Point3::new(0.005, 0.0, 0.0);
        let mut anim = MoveAnimation::new(Point3::ORIGIN, end, 3.0, 0.01);

        assert_eq!(anim.duration(), 0.0);
        assert_eq!(anim.advance(0.0), AnimationStatus::Completed(end));
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut anim = MoveAnimation::new(Point3::ORIGIN, Point3::new(3.0, 0.0, 0.0), 1.0, 0.01);
        anim.advance(1.0);
        anim.advance(-5.0);
        assert_eq!(anim.elapsed(), 1.0);
    }
}
