//! Simulation data types: bird, obstacle pairs, and collision rectangles.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in play-field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict-overlap test (touching edges do not count).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Returns a copy shrunk by `margin` on every side. Collapses to a
    /// zero-size rectangle at the center rather than inverting.
    pub fn shrunk(&self, margin: f64) -> Rect {
        let m = margin.min(self.w / 2.0).min(self.h / 2.0);
        Rect::new(self.x + m, self.y + m, self.w - 2.0 * m, self.h - 2.0 * m)
    }
}

/// The bird. Destroyed and recreated on every restart so no residual
/// physics state can leak between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirdState {
    /// Horizontal position; constant during play.
    pub x: f64,
    /// Vertical position of the bird's center.
    pub y: f64,
    /// Vertical velocity in px/s (positive = down).
    pub velocity: f64,
    /// Display rotation in degrees, derived from velocity each frame.
    pub rotation: f64,
    /// Cleared exactly once when the session ends.
    pub alive: bool,
}

impl BirdState {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            rotation: 0.0,
            alive: true,
        }
    }

    /// Unmargined bounding box around the bird's center.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - BIRD_HALF_EXTENT,
            self.y - BIRD_HALF_EXTENT,
            BIRD_HALF_EXTENT * 2.0,
            BIRD_HALF_EXTENT * 2.0,
        )
    }

    /// Bounding box with the symmetric inward collision margin applied.
    pub fn collision_bounds(&self) -> Rect {
        self.bounds().shrunk(BIRD_COLLISION_MARGIN)
    }
}

impl Default for BirdState {
    fn default() -> Self {
        Self::new()
    }
}

/// One top/bottom pipe set sharing a horizontal position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge of both pipes.
    pub x: f64,
    /// Top of the gap, in pixels from the field top.
    pub gap_top: f64,
    /// Vertical gap size; always >= [`MIN_PIPE_GAP`].
    pub gap: f64,
    /// Set once when the bird passes this pair.
    pub scored: bool,
}

impl ObstaclePair {
    /// Collision rectangle of the upper pipe (hangs down to `gap_top`).
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_top - PIPE_HEIGHT, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Collision rectangle of the lower pipe (starts below the gap).
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_top + self.gap, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Bottom of the gap band.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap
    }

    /// Horizontal center, used by the collision proximity window.
    pub fn center_x(&self) -> f64 {
        self.x + PIPE_WIDTH / 2.0
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen; physics paused.
    Ready,
    /// Simulation running.
    Running,
    /// Terminal; only restart leaves this phase.
    Over,
}

/// Physics overrides a player may tune through settings. Defaults mirror the
/// built-in constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsTuning {
    pub gravity: f64,
    pub flap_force: f64,
    pub pipe_speed: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_force: FLAP_FORCE,
            pipe_speed: PIPE_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_rect_shrunk_never_inverts() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        let s = r.shrunk(10.0);
        assert!(s.w >= 0.0);
        assert!(s.h >= 0.0);
    }

    #[test]
    fn test_bird_collision_bounds_smaller_than_visual() {
        let bird = BirdState::new();
        let outer = bird.bounds();
        let inner = bird.collision_bounds();
        assert!(inner.left() > outer.left());
        assert!(inner.right() < outer.right());
        assert!((outer.left() + BIRD_COLLISION_MARGIN - inner.left()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_obstacle_rects_frame_the_gap() {
        let pair = ObstaclePair {
            x: 400.0,
            gap_top: 250.0,
            gap: 150.0,
            scored: false,
        };
        assert!((pair.top_rect().bottom() - 250.0).abs() < f64::EPSILON);
        assert!((pair.bottom_rect().top() - 400.0).abs() < f64::EPSILON);
        assert!((pair.gap_bottom() - 400.0).abs() < f64::EPSILON);
    }
}
