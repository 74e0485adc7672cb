//! In-place binary max-heap over [`SequenceCount`] entries.
//!
//! Standard array layout: the parent of `i` is `(i - 1) / 2`, its
//! children are `2i + 1` and `2i + 2`. Entries are keyed by `count` alone.

use tricount_types::SequenceCount;

/// Restores the heap property for the subtree at `root`, considering only
/// `entries[..end]`.
#[inline(always)]
fn sift_down(entries: &mut [SequenceCount], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }

        let right = left + 1;
        let mut largest = root;

        if entries[left].count > entries[largest].count {
            largest = left;
        }
        if right < end && entries[right].count > entries[largest].count {
            largest = right;
        }

        if largest == root {
            return;
        }

        entries.swap(root, largest);
        root = largest;
    }
}

/// Arranges `entries` into a max-heap in O(n).
pub fn build_max_heap(entries: &mut [SequenceCount]) {
    let len = entries.len();
    for i in (0..len / 2).rev() {
        sift_down(entries, i, len);
    }
}

/// Returns true if `entries` satisfies the max-heap property.
pub fn is_max_heap(entries: &[SequenceCount]) -> bool {
    (1..entries.len()).all(|i| entries[(i - 1) / 2].count >= entries[i].count)
}

/// Partial heapsort: moves the `k` highest-count entries to the tail.
///
/// Builds a max-heap, then performs `k` extract-max steps, each swapping
/// the root into the trailing position and re-sifting from the root.
/// Runs in O(n + k log n) without a scratch buffer.
///
/// Returns the tail slice, which holds the selected entries in
/// **ascending** count order; iterate it reversed for a descending report.
/// Entries with equal counts come out in no particular order.
///
/// # Example
///
/// ```
/// use tricount_core::rank::select_top;
/// use tricount_types::SequenceCount;
///
/// let mut entries: Vec<_> = [4, 9, 1, 7]
///     .iter()
///     .map(|&c| SequenceCount::new(format!("seq{c}"), c))
///     .collect();
///
/// let top = select_top(&mut entries, 2);
/// let counts: Vec<u64> = top.iter().rev().map(|e| e.count).collect();
/// assert_eq!(counts, [9, 7]);
/// ```
pub fn select_top(entries: &mut [SequenceCount], k: usize) -> &mut [SequenceCount] {
    let len = entries.len();
    let k = k.min(len);

    if k == 0 {
        return &mut entries[len..];
    }

    build_max_heap(entries);

    for end in (len - k..len).rev() {
        entries.swap(0, end);
        sift_down(entries, 0, end);
    }

    &mut entries[len - k..]
}

/// Sorts `entries` by count, descending, with an in-place heapsort.
pub fn heap_sort_by_count(entries: &mut [SequenceCount]) {
    let len = entries.len();
    select_top(entries, len);
    entries.reverse();
}
