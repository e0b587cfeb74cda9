//! Tuning constants for the flappy simulation.
//!
//! All distances are in play-field pixels, all speeds in pixels per frame or
//! pixels per second as noted. The collision margins are deliberately exposed
//! as named constants: they are forgiveness policy, not geometry.

/// Play field dimensions in pixels.
pub const PLAY_WIDTH: f64 = 800.0;
pub const PLAY_HEIGHT: f64 = 600.0;

/// Top edge of the static ground band. Touching it is terminal.
pub const GROUND_TOP: f64 = 580.0;

/// Fixed simulation timestep: one update pass per rendered frame at 60 FPS.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Downward acceleration in px/s².
pub const GRAVITY: f64 = 1000.0;

/// Flap sets vertical velocity to this value (px/s, negative = up).
/// Not additive, matching the classic feel.
pub const FLAP_FORCE: f64 = -400.0;

/// Bird horizontal position; the bird never moves on the x axis.
pub const BIRD_X: f64 = 200.0;

/// Bird vertical start position.
pub const BIRD_START_Y: f64 = 300.0;

/// Half extent of the bird's unmargined bounding box.
pub const BIRD_HALF_EXTENT: f64 = 25.0;

/// Symmetric inward margin applied to the bird's box before any overlap test.
/// Tunable policy; interacts with [`GAP_TOLERANCE`].
pub const BIRD_COLLISION_MARGIN: f64 = 12.0;

/// Inward margin applied to each pipe rectangle before overlap tests.
pub const PIPE_COLLISION_MARGIN: f64 = 3.0;

/// Extra tolerance for the safe-gap override: a bird whose (margin-adjusted)
/// vertical extent sits within the gap band widened by this amount cannot
/// collide with either pipe of that pair.
pub const GAP_TOLERANCE: f64 = 10.0;

/// Obstacle pairs further than this from the bird (center to center) are
/// skipped entirely by the collision evaluator.
pub const PROXIMITY_WINDOW: f64 = 150.0;

/// Pipe sprite geometry.
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_HEIGHT: f64 = 400.0;

/// Horizontal scroll speed of obstacles in px/frame.
pub const PIPE_SPEED: f64 = 3.0;

/// Where a fresh obstacle pair enters when none are active.
pub const PIPE_RESPAWN_X: f64 = 800.0;

/// Obstacles are destroyed once their x drops below this.
pub const PIPE_DESPAWN_X: f64 = -100.0;

/// Spacing between consecutive pairs: interpolated from base down to min as
/// difficulty approaches [`SPACING_CAP_LEVEL`].
pub const BASE_PIPE_SPACING: f64 = 500.0;
pub const MIN_PIPE_SPACING: f64 = 200.0;
pub const SPACING_CAP_LEVEL: u32 = 20;

/// Gap size between a pair's pipes: interpolated from base down to min as
/// difficulty approaches [`GAP_CAP_LEVEL`], then jittered by up to
/// [`GAP_JITTER`] either way, never below the minimum.
pub const BASE_PIPE_GAP: f64 = 150.0;
pub const MIN_PIPE_GAP: f64 = 80.0;
pub const GAP_CAP_LEVEL: u32 = 15;
pub const GAP_JITTER: f64 = 10.0;

/// Vertical placement of the gap: uniform within a band around this center.
/// The band widens with difficulty but stays inside the play field.
pub const GAP_BAND_CENTER: f64 = 250.0;
pub const GAP_BAND_BASE_HALF: f64 = 50.0;
pub const GAP_BAND_GROWTH_PER_LEVEL: f64 = 8.0;
pub const GAP_BAND_MAX_HALF: f64 = 180.0;

/// Hard cap on simultaneously active obstacle pairs. Bounds both memory and
/// per-frame collision cost.
pub const MAX_ACTIVE_PIPES: usize = 3;

/// Obstacles passed per difficulty level-up.
pub const PIPES_PER_LEVEL: u32 = 3;

/// Background scroll speed in px/frame (cosmetic only).
pub const BACKGROUND_SPEED: f64 = 0.5;
