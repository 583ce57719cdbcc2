//! Scoring module - line clear points, levels and the gravity curve
//!
//! - Clearing 1/2/3/4 rows awards `line_scores[n - 1] * level`.
//! - Level is `1 + lines / lines_per_level`.
//! - Gravity is `max(gravity_min, gravity_start * gravity_decay^(level - 1))`.
//! - A hard drop awards 2 points per cell travelled.

use std::time::Duration;

use crate::config::GameConfig;
use crate::types::HARD_DROP_POINTS_PER_CELL;

/// Points for clearing `rows` rows at `level`
///
/// A 4-cell piece can complete at most 4 rows. Larger counts only come from a
/// hand-built board and are scored as 4 rows.
pub fn line_clear_points(line_scores: &[u32; 4], rows: usize, level: u32) -> u32 {
    debug_assert!(rows <= 4, "cleared {rows} rows with a single lock");
    if rows == 0 {
        return 0;
    }
    line_scores[rows.min(4) - 1].saturating_mul(level)
}

/// Level after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    1 + total_lines / lines_per_level.max(1)
}

/// Gravity interval (time per cell) for a level
pub fn gravity_for_level(config: &GameConfig, level: u32) -> Duration {
    if level <= 1 {
        return config.gravity_start.max(config.gravity_min);
    }
    let exponent = (level - 1).min(i32::MAX as u32) as i32;
    let scaled = config.gravity_start.as_secs_f64() * config.gravity_decay.powi(exponent);
    Duration::try_from_secs_f64(scaled)
        .unwrap_or(config.gravity_start)
        .max(config.gravity_min)
}

/// Points for a hard drop of `cells` rows
pub fn hard_drop_points(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LINE_SCORES;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_points(&LINE_SCORES, 0, 1), 0);
        assert_eq!(line_clear_points(&LINE_SCORES, 1, 1), 100);
        assert_eq!(line_clear_points(&LINE_SCORES, 2, 1), 300);
        assert_eq!(line_clear_points(&LINE_SCORES, 3, 1), 500);
        assert_eq!(line_clear_points(&LINE_SCORES, 4, 1), 800);

        assert_eq!(line_clear_points(&LINE_SCORES, 1, 5), 500);
        assert_eq!(line_clear_points(&LINE_SCORES, 4, 3), 2400);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0, 10), 1);
        assert_eq!(level_for_lines(9, 10), 1);
        assert_eq!(level_for_lines(10, 10), 2);
        assert_eq!(level_for_lines(25, 10), 3);
    }

    #[test]
    fn test_gravity_curve() {
        let config = GameConfig::default();

        assert_eq!(gravity_for_level(&config, 1), Duration::from_millis(850));

        let level2 = gravity_for_level(&config, 2).as_secs_f64();
        assert!((level2 - 0.85 * 0.93).abs() < 1e-9);

        // Decays towards the floor and stays there
        assert_eq!(gravity_for_level(&config, 200), Duration::from_millis(60));
        assert!(gravity_for_level(&config, 10) > gravity_for_level(&config, 11));
    }

    #[test]
    fn test_hard_drop_points() {
        assert_eq!(hard_drop_points(0), 0);
        assert_eq!(hard_drop_points(18), 36);
    }
}
