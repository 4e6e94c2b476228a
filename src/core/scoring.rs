//! Scoring, level, and speed curves.
//!
//! Pure functions; [`GameState`](crate::core::GameState) recomputes level
//! and speed from the running score after every landing.

use crate::types::{BASE_SPEED, LINE_SCORES, MAX_LEVEL, SCORE_PER_LEVEL, SPEED_STEP};

/// Points awarded for clearing `lines` rows in a single landing.
pub fn score_for(lines: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines as usize],
        _ => 0,
    }
}

/// Level for a score: one level per 600 points, clamped to 10.
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Ticks between automatic falls at a level. Higher level, fewer ticks.
pub fn speed_for_level(level: u32) -> u32 {
    BASE_SPEED - SPEED_STEP * level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 100);
        assert_eq!(score_for(2), 300);
        assert_eq!(score_for(3), 700);
        assert_eq!(score_for(4), 1500);
        assert_eq!(score_for(5), 0);
    }

    #[test]
    fn test_level_curve() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(599), 1);
        assert_eq!(level_for_score(600), 2);
        assert_eq!(level_for_score(1199), 2);
        assert_eq!(level_for_score(5400), 10);
        assert_eq!(level_for_score(100_000), 10);
    }

    #[test]
    fn test_speed_curve() {
        assert_eq!(speed_for_level(1), 20);
        assert_eq!(speed_for_level(2), 18);
        assert_eq!(speed_for_level(10), 2);
    }

    #[test]
    fn test_speed_never_reaches_zero_within_level_cap() {
        for level in 1..=MAX_LEVEL {
            assert!(speed_for_level(level) > 0);
        }
    }
}
