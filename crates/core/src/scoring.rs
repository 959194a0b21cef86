//! Scoring module - line-clear points, level policy and gravity speed
//!
//! Points depend only on how many rows one lock clears:
//!
//! | Rows | Points |
//! |------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! There is no level multiplier, combo or drop bonus.

use crate::types::{
    BASE_DROP_MS, DEFAULT_LINES_PER_LEVEL, DROP_STEP_MS, LINE_SCORES, MIN_DROP_MS,
    SCORE_PER_LEVEL,
};

/// Points for clearing `rows` rows at once. Anything outside 1..=4 is 0.
pub fn line_clear_score(rows: usize) -> u32 {
    match rows {
        1..=4 => LINE_SCORES[rows - 1],
        _ => 0,
    }
}

/// How the level is derived from progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPolicy {
    /// One level per 1000 points
    #[default]
    Score,
    /// One level per `per_level` cleared lines
    Lines { per_level: u32 },
}

impl LevelPolicy {
    /// Level (1-based) for the given totals
    pub fn level_for(&self, score: u32, lines: u32) -> u32 {
        match *self {
            LevelPolicy::Score => score / SCORE_PER_LEVEL + 1,
            LevelPolicy::Lines { per_level } => lines / per_level.max(1) + 1,
        }
    }

    /// Parse `score`, `lines` or `lines:N`
    ///
    /// ```
    /// use blockfall_core::LevelPolicy;
    ///
    /// assert_eq!(LevelPolicy::from_str("score"), Some(LevelPolicy::Score));
    /// assert_eq!(
    ///     LevelPolicy::from_str("lines:5"),
    ///     Some(LevelPolicy::Lines { per_level: 5 })
    /// );
    /// assert_eq!(LevelPolicy::from_str("lines:0"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.split_once(':') {
            None if s == "score" => Some(LevelPolicy::Score),
            None if s == "lines" => Some(LevelPolicy::Lines {
                per_level: DEFAULT_LINES_PER_LEVEL,
            }),
            Some(("lines", n)) => match n.trim().parse::<u32>() {
                Ok(per_level) if per_level > 0 => Some(LevelPolicy::Lines { per_level }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Gravity interval for a level: 1000ms at level 1, 100ms faster per level,
/// never below 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_score_policy_levels() {
        let policy = LevelPolicy::Score;
        assert_eq!(policy.level_for(0, 0), 1);
        assert_eq!(policy.level_for(999, 40), 1);
        assert_eq!(policy.level_for(1000, 0), 2);
        assert_eq!(policy.level_for(2500, 0), 3);
    }

    #[test]
    fn test_lines_policy_levels() {
        let policy = LevelPolicy::Lines { per_level: 10 };
        assert_eq!(policy.level_for(5000, 0), 1);
        assert_eq!(policy.level_for(0, 9), 1);
        assert_eq!(policy.level_for(0, 10), 2);
        assert_eq!(policy.level_for(0, 29), 3);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            LevelPolicy::from_str("Lines"),
            Some(LevelPolicy::Lines { per_level: 10 })
        );
        assert_eq!(LevelPolicy::from_str("lines:x"), None);
        assert_eq!(LevelPolicy::from_str("time"), None);
        assert_eq!(LevelPolicy::default(), LevelPolicy::Score);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);
        // Level 0 never happens, but must not speed past level 1.
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = drop_interval_ms(1);
        for level in 2..50 {
            let next = drop_interval_ms(level);
            assert!(next <= prev);
            assert!(next > 0);
            prev = next;
        }
    }
}
