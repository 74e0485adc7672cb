//! Counting statistics.

use crate::counter::TrigramCounts;

/// A snapshot of counting-pass statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountStats {
    /// Number of lines consumed.
    pub lines_read: u64,
    /// Number of words produced by the tokenizer.
    pub words_seen: u64,
    /// Number of trigram occurrences counted.
    pub trigrams_emitted: u64,
    /// Number of distinct trigrams in the mapping.
    pub unique_trigrams: usize,
}

impl CountStats {
    /// Constructs stats for a finished mapping.
    pub fn with_counts(mut self, counts: &TrigramCounts) -> Self {
        self.unique_trigrams = counts.len();
        self
    }

    /// Ratio of distinct trigrams to counted occurrences, in `0.0..=1.0`.
    ///
    /// Returns 0.0 when nothing was counted.
    pub fn distinct_ratio(&self) -> f64 {
        if self.trigrams_emitted == 0 {
            0.0
        } else {
            self.unique_trigrams as f64 / self.trigrams_emitted as f64
        }
    }
}

impl core::fmt::Display for CountStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} lines, {} words, {} trigrams ({} distinct)",
            self.lines_read, self.words_seen, self.trigrams_emitted, self.unique_trigrams
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let stats = CountStats {
            lines_read: 2,
            words_seen: 9,
            trigrams_emitted: 7,
            unique_trigrams: 6,
        };
        assert_eq!(
            stats.to_string(),
            "2 lines, 9 words, 7 trigrams (6 distinct)"
        );
    }

    #[test]
    fn distinct_ratio() {
        assert_eq!(CountStats::default().distinct_ratio(), 0.0);

        let stats = CountStats {
            trigrams_emitted: 4,
            unique_trigrams: 2,
            ..CountStats::default()
        };
        assert_eq!(stats.distinct_ratio(), 0.5);
    }

    #[test]
    fn with_counts_sets_unique() {
        let mut counts = TrigramCounts::default();
        counts.insert("a b c".into(), 3);
        counts.insert("b c d".into(), 1);

        let stats = CountStats::default().with_counts(&counts);
        assert_eq!(stats.unique_trigrams, 2);
    }
}
