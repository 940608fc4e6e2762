//! Submitted words and the running score

use super::GameError;
use crate::core::scoring::score;
use log::debug;
use rustc_hash::FxHashSet;

/// One submitted word and the points it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub word: String,
    pub score: u32,
}

/// Words submitted this game, in submission order, plus the total
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    seen: FxHashSet<String>,
    entries: Vec<LedgerEntry>,
    total: u32,
}

impl HistoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` and return its score
    ///
    /// Words are compared exactly as spelled. The caller rejects empty words
    /// before getting here.
    ///
    /// # Errors
    /// Returns `GameError::DuplicateWord` if the word was already recorded; the
    /// ledger is left untouched.
    pub fn submit(&mut self, word: &str) -> Result<u32, GameError> {
        if self.seen.contains(word) {
            return Err(GameError::DuplicateWord);
        }

        let points = score(word);
        self.seen.insert(word.to_string());
        self.entries.push(LedgerEntry {
            word: word.to_string(),
            score: points,
        });
        self.total += points;
        debug!("Recorded {word} for {points} points (total {})", self.total);

        Ok(points)
    }

    /// Whether `word` has been submitted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Entries in submission order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Sum of all recorded scores
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_scores_and_totals() {
        let mut ledger = HistoryLedger::new();

        assert_eq!(ledger.submit("CAT"), Ok(1));
        assert_eq!(ledger.submit("PLANET"), Ok(3));
        assert_eq!(ledger.total(), 4);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn duplicate_is_rejected_without_change() {
        let mut ledger = HistoryLedger::new();
        ledger.submit("CAT").unwrap();

        assert_eq!(ledger.submit("CAT"), Err(GameError::DuplicateWord));
        assert_eq!(ledger.total(), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut ledger = HistoryLedger::new();
        for word in ["TEN", "AT", "STONES"] {
            ledger.submit(word).unwrap();
        }

        let words: Vec<&str> = ledger.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["TEN", "AT", "STONES"]);
        assert_eq!(ledger.entries()[1].score, 0);
        assert_eq!(ledger.total(), 4);
    }

    #[test]
    fn short_words_are_recorded_for_zero() {
        let mut ledger = HistoryLedger::new();
        assert_eq!(ledger.submit("AT"), Ok(0));
        assert!(ledger.contains("AT"));
        assert_eq!(ledger.submit("AT"), Err(GameError::DuplicateWord));
    }

    #[test]
    fn total_equals_sum_of_entries() {
        let mut ledger = HistoryLedger::new();
        for word in ["QuIT", "QuEEN", "RESTING", "STRANGER"] {
            ledger.submit(word).unwrap();
        }
        let sum: u32 = ledger.entries().iter().map(|e| e.score).sum();
        assert_eq!(ledger.total(), sum);
        assert_eq!(sum, 1 + 2 + 5 + 11);
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0);
        assert!(!ledger.contains("CAT"));
    }
}
