//! Top-K selection over the count mapping.
//!
//! The mapping is flattened into [`SequenceCount`] entries and a partial
//! heapsort moves the highest counts to the tail of the array, so only
//! `min(n, limit)` extract-max steps are paid for.
//!
//! There is no secondary sort key. Entries with equal counts are reported
//! in whatever order the hash map and the heap leave them, which can vary
//! between runs.

pub mod heap;

pub use heap::{build_max_heap, heap_sort_by_count, is_max_heap, select_top};

use tricount_types::{ReportConfig, SequenceCount, MAX_SEQUENCES};

use crate::counter::TrigramCounts;

/// Number of entries to emit for a mapping of `total` entries.
///
/// Returns `None` when there is nothing to report, `Some(100)` once the
/// mapping reaches 100 entries, and `Some(total)` otherwise.
///
/// ```
/// use tricount_core::rank::max_sequences;
///
/// assert_eq!(max_sequences(105), Some(100));
/// assert_eq!(max_sequences(50), Some(50));
/// assert_eq!(max_sequences(0), None);
/// ```
#[inline]
pub const fn max_sequences(total: usize) -> Option<usize> {
    max_sequences_with(total, MAX_SEQUENCES)
}

/// Like [`max_sequences`] with a configurable cap.
#[inline]
pub const fn max_sequences_with(total: usize, limit: usize) -> Option<usize> {
    if total == 0 {
        None
    } else if total >= limit {
        Some(limit)
    } else {
        Some(total)
    }
}

/// Flattens `counts` and returns the top entries, highest count first.
///
/// Returns an empty list for an empty mapping.
pub fn top_sequences(counts: TrigramCounts, config: &ReportConfig) -> Vec<SequenceCount> {
    let mut entries: Vec<SequenceCount> = counts.into_iter().map(SequenceCount::from).collect();

    let Some(k) = max_sequences_with(entries.len(), config.max_sequences) else {
        return Vec::new();
    };

    let len = entries.len();
    select_top(&mut entries, k);

    entries.drain(..len - k);
    entries.reverse();
    entries
}
