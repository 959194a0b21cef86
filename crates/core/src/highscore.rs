//! High-score table.
//!
//! Keeps the best few scores in descending order. Storage is the host's
//! business; the table only derives serde so any format will do.

use serde::{Deserialize, Serialize};

use crate::types::HIGH_SCORE_SLOTS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, restoring order and the size limit.
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.retain(|e| e.score > 0);
        // Stable sort keeps the earlier of two equal scores first.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(HIGH_SCORE_SLOTS);
        Self { entries }
    }

    /// Record a finished game.
    ///
    /// Scores of zero are ignored. Returns the 0-based rank if the entry made
    /// the table.
    pub fn record(&mut self, score: u32, date: impl Into<String>) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < score)
            .unwrap_or(self.entries.len());
        if rank >= HIGH_SCORE_SLOTS {
            return None;
        }
        self.entries.insert(
            rank,
            HighScoreEntry {
                score,
                date: date.into(),
            },
        );
        self.entries.truncate(HIGH_SCORE_SLOTS);
        Some(rank)
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(table: &HighScores) -> Vec<u32> {
        table.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_zero_score_is_not_recorded() {
        let mut table = HighScores::new();
        assert_eq!(table.record(0, "2024-01-01 10:00"), None);
        assert!(table.is_empty());
        assert_eq!(table.best(), None);
    }

    #[test]
    fn test_entries_stay_descending_and_capped() {
        let mut table = HighScores::new();
        for score in [300, 100, 800, 500, 200, 1200] {
            table.record(score, "d");
        }
        assert_eq!(scores(&table), vec![1200, 800, 500, 300, 200]);
        assert_eq!(table.best(), Some(1200));

        // Too low for a full table.
        assert_eq!(table.record(150, "d"), None);
        assert_eq!(table.record(600, "d"), Some(2));
        assert_eq!(scores(&table), vec![1200, 800, 600, 500, 300]);
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut table = HighScores::new();
        table.record(500, "first");
        assert_eq!(table.record(500, "second"), Some(1));
        assert_eq!(table.entries()[0].date, "first");
    }

    #[test]
    fn test_from_entries_normalizes() {
        let raw = [100, 0, 900, 400, 300, 200, 700]
            .into_iter()
            .map(|score| HighScoreEntry {
                score,
                date: format!("day {score}"),
            })
            .collect();
        let table = HighScores::from_entries(raw);
        assert_eq!(scores(&table), vec![900, 700, 400, 300, 200]);
    }
}
