//! Word trigram extraction.
//!
//! Provides the sliding window that turns a stream of words into
//! 3-word sequences. The window outlives any single line, so a trigram
//! may span a line break.

use smallvec::SmallVec;
use tricount_types::WORDS_PER_TRIGRAM;

use super::tokenizer::Tokenizer;

/// The last [`WORDS_PER_TRIGRAM`] words seen.
///
/// Pushing a word appends it and evicts the oldest once the window is
/// full. A trigram is produced only while the window holds exactly three
/// words, so the first two words of a stream produce nothing.
///
/// # Example
///
/// ```
/// use tricount_core::analyzer::SlidingWindow;
///
/// let mut window = SlidingWindow::new();
/// assert_eq!(window.push("the"), None);
/// assert_eq!(window.push("quick"), None);
/// assert_eq!(window.push("brown"), Some("the quick brown"));
/// assert_eq!(window.push("fox"), Some("quick brown fox"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlidingWindow {
    words: SmallVec<[String; WORDS_PER_TRIGRAM]>,
    joined: String,
}

impl SlidingWindow {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a word and returns the joined trigram if the window is full.
    ///
    /// The returned slice borrows an internal buffer that is overwritten by
    /// the next push.
    pub fn push(&mut self, word: &str) -> Option<&str> {
        if self.words.len() == WORDS_PER_TRIGRAM {
            // Recycle the evicted word's allocation.
            let mut oldest = self.words.remove(0);
            oldest.clear();
            oldest.push_str(word);
            self.words.push(oldest);
        } else {
            self.words.push(word.to_owned());
        }

        debug_assert!(self.words.len() <= WORDS_PER_TRIGRAM);

        if self.words.len() != WORDS_PER_TRIGRAM {
            return None;
        }

        self.joined.clear();
        for (i, w) in self.words.iter().enumerate() {
            if i > 0 {
                self.joined.push(' ');
            }
            self.joined.push_str(w);
        }

        Some(self.joined.as_str())
    }

    /// Number of words currently held (never more than three).
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words have been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true once the window holds a full trigram.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.words.len() == WORDS_PER_TRIGRAM
    }

    /// Iterates the held words, oldest first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Empties the window, keeping allocations.
    pub fn clear(&mut self) {
        self.words.clear();
        self.joined.clear();
    }
}

/// Extracts trigrams from scrubbed text using a fresh sliding window.
///
/// For text with fewer than 3 words, no trigrams are emitted.
/// For text of N words, exactly N-2 trigrams are emitted.
///
/// # Example
///
/// ```
/// use tricount_core::analyzer::trigram::extract_trigrams;
///
/// let mut trigrams = Vec::new();
/// extract_trigrams("a b c d", |t| trigrams.push(t.to_owned()));
///
/// assert_eq!(trigrams, ["a b c", "b c d"]);
/// ```
pub fn extract_trigrams<F>(scrubbed: &str, mut callback: F)
where
    F: FnMut(&str),
{
    let mut window = SlidingWindow::new();
    Tokenizer::new().tokenize(scrubbed, |word, _| {
        if let Some(trigram) = window.push(word) {
            callback(trigram);
        }
    });
}

/// Number of trigrams produced by `words` consecutive words.
#[inline(always)]
pub const fn trigrams_for_words(words: usize) -> usize {
    words.saturating_sub(WORDS_PER_TRIGRAM - 1)
}
