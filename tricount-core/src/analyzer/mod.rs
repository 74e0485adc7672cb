//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Scrubber**: Lowercases a line and reduces it to space-separated words
//! - **Tokenizer**: Splits scrubbed text into words
//! - **Trigram**: Slides a 3-word window over the word stream

pub mod scrubber;
pub mod tokenizer;
pub mod trigram;

pub use scrubber::{LineScrubber, SCRUB_PATTERN};
pub use tokenizer::Tokenizer;
pub use trigram::{extract_trigrams, trigrams_for_words, SlidingWindow};
