//! Word trigram counting and top-K frequency selection.
//!
//! The pipeline has two stages:
//!
//! - **Counting** ([`counter`]): lines are scrubbed, split into words, and
//!   pushed through a 3-word sliding window; each full window increments a
//!   [`TrigramCounts`] entry.
//! - **Ranking** ([`rank`]): the mapping is flattened and a partial
//!   heapsort selects the highest counts (at most 100 by default).
//!
//! ```
//! use tricount_core::{count_trigrams, rank, TrigramCounts};
//! use tricount_types::ReportConfig;
//!
//! let mut counts = TrigramCounts::default();
//! count_trigrams("to be or not to be or not".as_bytes(), &mut counts).unwrap();
//!
//! let top = rank::top_sequences(counts, &ReportConfig::default());
//! assert_eq!(top[0].count, 2);
//! ```

pub mod analyzer;
pub mod counter;
pub mod rank;
pub mod report;
pub mod source;
pub mod stats;

pub use counter::{count_trigrams, TrigramCounter, TrigramCounts};
pub use rank::{max_sequences, top_sequences};
pub use report::write_report;
pub use source::{count_source, InputSource};
pub use stats::CountStats;
