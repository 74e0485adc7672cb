//! Streaming Tokenizer Module
//!
//! This module provides a zero-allocation tokenizer that splits scrubbed text into
//! individual words. It's the second stage in the counting pipeline, taking the
//! single-space-separated output of the [`LineScrubber`](super::LineScrubber) and
//! handing each word to the sliding window.
//!
//! ## What It Does
//!
//! Given scrubbed input like `"hello world foo bar"`, it emits each word with its
//! position in the line:
//!
//! ```ignore
//! ("hello", 0)
//! ("world", 1)
//! ("foo", 2)
//! ("bar", 3)
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer expects **scrubbed** input:
//! - ASCII-only text
//! - All lowercase
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! If you violate this contract, the tokenizer will panic in debug mode with a helpful message.
//! Release builds still skip empty tokens.

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer - splits scrubbed text into words.
///
/// Tokens are not copied; they're slices (`&str`) into the input string.
/// It does a single forward scan for ASCII space bytes (0x20), and each
/// non-space run between spaces becomes a token.
///
/// ## Example
///
/// ```
/// use tricount_core::analyzer::Tokenizer;
///
/// let mut count = 0;
/// Tokenizer::new().tokenize("hello world foo", |_word, _pos| count += 1);
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes scrubbed input and emits `(word, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, scrubbed: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = scrubbed.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace: scrubber contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace: scrubber contract violated"
        );

        debug_assert!(
            !scrubbed.contains("  "),
            "tokenizer: consecutive spaces: scrubber contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `scrubbed` is valid UTF-8. We split only on ASCII space (0x20),
                // which is never a continuation byte, so `bytes[start..i]` is always a
                // valid UTF-8 subslice.
                let word = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(word, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above, `bytes[start..]` is a valid UTF-8
            // subslice since `start` was set to `i + 1` after an ASCII space byte.
            let word = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(word, pos);
        }
    }

    /// Counts the words in scrubbed input without emitting them.
    #[inline]
    pub fn count_words(&self, scrubbed: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(scrubbed, |_, _| n += 1);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |word, pos| out.push((word, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world");
        assert_eq!(out, vec![("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn single_char_token() {
        assert_eq!(collect("a"), vec![("a", 0)]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |word, _| {
            let ptr = word.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        Tokenizer::new().tokenize(&input, |word, pos| {
            assert_eq!(word, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn count_words_matches_tokenize() {
        let t = Tokenizer::new();
        assert_eq!(t.count_words(""), 0);
        assert_eq!(t.count_words("hello world"), 2);
        assert_eq!(t.count_words("one two three"), 3);
    }
}
