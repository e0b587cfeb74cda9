//! Pipe spawning and the difficulty-driven spacing/gap formulas.
//!
//! Spacing and gap size are pure functions of the difficulty level; only the
//! gap's vertical placement and size jitter consume randomness. The spawner
//! refuses to create a pair while the active count is at the cap.

use super::constants::*;
use super::types::ObstaclePair;
use rand::Rng;

/// Horizontal distance to the next pair at the given difficulty level.
/// Linearly interpolated from the base down to the minimum, reaching the
/// minimum at [`SPACING_CAP_LEVEL`].
pub fn spacing_for_level(level: u32) -> f64 {
    let progress = (level as f64 / SPACING_CAP_LEVEL as f64).min(1.0);
    BASE_PIPE_SPACING - (BASE_PIPE_SPACING - MIN_PIPE_SPACING) * progress
}

/// Gap size at the given difficulty level before jitter. Reaches the minimum
/// at [`GAP_CAP_LEVEL`].
pub fn gap_for_level(level: u32) -> f64 {
    let progress = (level as f64 / GAP_CAP_LEVEL as f64).min(1.0);
    BASE_PIPE_GAP - (BASE_PIPE_GAP - MIN_PIPE_GAP) * progress
}

/// Where the next pair spawns: the fixed respawn coordinate when the field is
/// empty, otherwise one spacing interval to the right of the last pair.
pub fn next_spawn_x(level: u32, last_obstacle_x: Option<f64>) -> f64 {
    match last_obstacle_x {
        None => PIPE_RESPAWN_X,
        Some(last_x) => last_x + spacing_for_level(level),
    }
}

/// Create one obstacle pair for the given difficulty level.
///
/// The gap size is jittered within ±[`GAP_JITTER`] and clamped to the
/// minimum. The gap's vertical placement is uniform within a band that widens
/// with level, clamped so the gap sits fully between the field top and the
/// ground.
pub fn spawn_obstacle<R: Rng>(
    level: u32,
    last_obstacle_x: Option<f64>,
    rng: &mut R,
) -> ObstaclePair {
    let jitter = rng.gen_range(-GAP_JITTER..=GAP_JITTER);
    let gap = (gap_for_level(level) + jitter).max(MIN_PIPE_GAP);

    let band_half =
        (GAP_BAND_BASE_HALF + GAP_BAND_GROWTH_PER_LEVEL * level as f64).min(GAP_BAND_MAX_HALF);
    let lo = (GAP_BAND_CENTER - band_half).max(0.0);
    let hi = (GAP_BAND_CENTER + band_half).min(GROUND_TOP - gap).max(lo);
    let gap_top = rng.gen_range(lo..=hi);

    ObstaclePair {
        x: next_spawn_x(level, last_obstacle_x),
        gap_top,
        gap,
        scored: false,
    }
}

/// Whether a new pair may spawn given the current active count.
pub fn can_spawn(active_count: usize) -> bool {
    active_count < MAX_ACTIVE_PIPES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spacing_starts_at_base() {
        assert!((spacing_for_level(0) - BASE_PIPE_SPACING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spacing_reaches_minimum_at_cap() {
        assert!((spacing_for_level(SPACING_CAP_LEVEL) - MIN_PIPE_SPACING).abs() < f64::EPSILON);
        assert!((spacing_for_level(SPACING_CAP_LEVEL + 50) - MIN_PIPE_SPACING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gap_starts_at_base_and_reaches_minimum() {
        assert!((gap_for_level(0) - BASE_PIPE_GAP).abs() < f64::EPSILON);
        assert!((gap_for_level(GAP_CAP_LEVEL) - MIN_PIPE_GAP).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spacing_and_gap_never_below_minimums() {
        for level in 0..200 {
            assert!(spacing_for_level(level) >= MIN_PIPE_SPACING);
            assert!(gap_for_level(level) >= MIN_PIPE_GAP);
        }
    }

    #[test]
    fn test_first_spawn_uses_respawn_x() {
        assert!((next_spawn_x(0, None) - PIPE_RESPAWN_X).abs() < f64::EPSILON);
    }

    #[test]
    fn test_second_spawn_offsets_by_base_spacing() {
        // Level 0, last pair at the respawn coordinate: next pair lands one
        // base spacing to the right (800 + 500 = 1300).
        let x = next_spawn_x(0, Some(PIPE_RESPAWN_X));
        assert!((x - 1300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawned_gap_respects_minimum_despite_jitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for level in 0..50 {
            let pair = spawn_obstacle(level, None, &mut rng);
            assert!(pair.gap >= MIN_PIPE_GAP);
        }
    }

    #[test]
    fn test_spawned_gap_fully_inside_play_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for level in 0..100 {
            let pair = spawn_obstacle(level, Some(300.0), &mut rng);
            assert!(pair.gap_top >= 0.0, "gap top above field at level {level}");
            assert!(
                pair.gap_bottom() <= GROUND_TOP,
                "gap bottom below ground at level {level}"
            );
        }
    }

    #[test]
    fn test_spawned_pair_is_unscored() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pair = spawn_obstacle(0, None, &mut rng);
        assert!(!pair.scored);
    }

    #[test]
    fn test_can_spawn_respects_cap() {
        assert!(can_spawn(0));
        assert!(can_spawn(MAX_ACTIVE_PIPES - 1));
        assert!(!can_spawn(MAX_ACTIVE_PIPES));
        assert!(!can_spawn(MAX_ACTIVE_PIPES + 1));
    }
}
