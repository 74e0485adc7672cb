//! Trigram counting pass.
//!
//! Reads a line-oriented stream and counts every 3-word sequence:
//!
//! 1. Each line is scrubbed (lowercased, non-letter runs collapsed to a space)
//! 2. The tokenizer splits it into words
//! 3. Words are pushed through a [`SlidingWindow`] that persists across lines
//! 4. Every full window increments its joined sequence in the mapping
//!
//! The mapping is owned by the caller and handed in by exclusive reference.

use std::io::BufRead;

use rustc_hash::FxHashMap;
use tracing::debug;
use tricount_types::{Count, CountError, Result};

use crate::analyzer::{trigrams_for_words, LineScrubber, SlidingWindow, Tokenizer};
use crate::stats::CountStats;

/// Mapping from trigram text to occurrence count.
///
/// Iteration order is unspecified, which is why equal counts have no
/// defined order in the report.
pub type TrigramCounts = FxHashMap<String, Count>;

/// Stateful trigram counter.
///
/// Holds the scrubber, the sliding window and the mapping for one run.
/// Feeding lines one at a time lets trigrams span line breaks.
///
/// # Example
///
/// ```
/// use tricount_core::TrigramCounter;
///
/// let mut counter = TrigramCounter::new().unwrap();
/// counter.feed_line("The cat sat.");
/// counter.feed_line("The cat sat!");
///
/// assert_eq!(counter.counts().get("the cat sat"), Some(&2));
/// assert_eq!(counter.counts().get("cat sat the"), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct TrigramCounter {
    scrubber: LineScrubber,
    tokenizer: Tokenizer,
    window: SlidingWindow,
    counts: TrigramCounts,
    stats: CountStats,
    line_buf: String,
    scrub_buf: String,
}

impl TrigramCounter {
    /// Creates a counter with an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::PatternCompile`] if the scrubber cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_scrubber(LineScrubber::new()?))
    }

    /// Creates a counter around an existing scrubber.
    pub fn with_scrubber(scrubber: LineScrubber) -> Self {
        Self {
            scrubber,
            tokenizer: Tokenizer::new(),
            window: SlidingWindow::new(),
            counts: TrigramCounts::default(),
            stats: CountStats::default(),
            line_buf: String::with_capacity(256),
            scrub_buf: String::with_capacity(256),
        }
    }

    /// Counts the trigrams of one line.
    ///
    /// Trailing line terminators are ignored. The window carries over to
    /// the next call.
    pub fn feed_line(&mut self, line: &str) {
        let Self {
            scrubber,
            tokenizer,
            window,
            counts,
            stats,
            scrub_buf,
            ..
        } = self;

        stats.lines_read += 1;
        scrubber.scrub_into(line, scrub_buf);

        tokenizer.tokenize(scrub_buf.as_str(), |word, _| {
            stats.words_seen += 1;

            let Some(trigram) = window.push(word) else {
                return;
            };

            stats.trigrams_emitted += 1;
            if let Some(count) = counts.get_mut(trigram) {
                *count += 1;
            } else {
                counts.insert(trigram.to_owned(), 1);
            }
        });
    }

    /// Counts every line of `reader`.
    ///
    /// The reader is consumed and dropped before this returns, whether the
    /// scan succeeds or not. Counts gathered before a failure are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::Scan`] on the first read failure, including
    /// input that is not valid UTF-8.
    pub fn count_reader<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut line = std::mem::take(&mut self.line_buf);

        let outcome = loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break Ok(()),
                Ok(_) => self.feed_line(line.trim_end_matches(['\n', '\r'])),
                Err(err) => break Err(CountError::Scan(err)),
            }
        };

        drop(reader);
        self.line_buf = line;
        outcome
    }

    /// Returns the mapping built so far.
    #[inline]
    pub fn counts(&self) -> &TrigramCounts {
        &self.counts
    }

    /// Consumes the counter and returns the mapping.
    #[inline]
    pub fn into_counts(self) -> TrigramCounts {
        self.counts
    }

    /// Returns statistics for the lines fed so far.
    pub fn stats(&self) -> CountStats {
        self.stats.with_counts(&self.counts)
    }

    /// Returns the sliding window (for inspection).
    #[inline]
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }
}

/// Runs a counting pass over `reader`, adding into `counts`.
///
/// `reader` is released exactly once before returning. On failure the
/// mapping keeps whatever was counted before the fault and the error is
/// returned unretried.
///
/// # Example
///
/// ```
/// use tricount_core::{count_trigrams, TrigramCounts};
///
/// let mut counts = TrigramCounts::default();
/// let stats = count_trigrams("a b c d".as_bytes(), &mut counts).unwrap();
///
/// assert_eq!(counts.len(), 2);
/// assert_eq!(stats.words_seen, 4);
/// ```
pub fn count_trigrams<R: BufRead>(reader: R, counts: &mut TrigramCounts) -> Result<CountStats> {
    let scrubber = LineScrubber::new()?;

    let mut counter = TrigramCounter::with_scrubber(scrubber);
    counter.counts = std::mem::take(counts);

    let outcome = counter.count_reader(reader);
    let stats = counter.stats();
    *counts = counter.into_counts();

    // The window spans lines, so every word past the second closes a trigram.
    debug_assert_eq!(
        stats.trigrams_emitted,
        trigrams_for_words(stats.words_seen as usize) as u64
    );

    match &outcome {
        Ok(()) => debug!(%stats, "counting pass finished"),
        Err(err) => debug!(%stats, error = %err, "counting pass aborted"),
    }

    outcome.map(|()| stats)
}
