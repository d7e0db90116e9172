//! Top-down merge sort that ping-pongs between two buffer pairs.
//!
//! Each level sorts its halves into `src` (the children run with the roles
//! swapped) and then merges `src` into `dst`. Both pairs must hold the same
//! contents over `[low, high)` on entry; every leaf then finds its input
//! already in place in whichever pair it writes to.

use crate::PairBuf;

use super::common;

/// How a level produced its output in `dst`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergePath {
    /// The range was short enough to insertion sort in place.
    InsertionSorted,
    /// The halves were already in order and were copied as one block.
    Copied,
    /// Every right key was below every left key; the halves swapped places.
    Swapped,
    /// The halves were merged element by element.
    Merged,
}

/// Sorts `[low, high)` into `dst`. `src` is clobbered over the same range.
///
/// Returns the path taken by the outermost level.
pub fn sort(
    src: &mut PairBuf<'_>,
    dst: &mut PairBuf<'_>,
    low: usize,
    high: usize,
    threshold: usize,
) -> MergePath {
    let len = high - low;
    if len <= threshold {
        common::insertion_sort(dst, low, high);
        return MergePath::InsertionSorted;
    }

    let mid = low + (len >> 1);

    sort(dst, src, low, mid, threshold);
    sort(dst, src, mid, high, threshold);

    merge_halves(src, dst, low, mid, high)
}

#[inline]
fn merge_halves(
    src: &PairBuf<'_>,
    dst: &mut PairBuf<'_>,
    low: usize,
    mid: usize,
    high: usize,
) -> MergePath {
    if src.keys[mid - 1] <= src.keys[mid] {
        common::copy_pairs(src, dst, low, low, high - low);
        return MergePath::Copied;
    }

    // Strict so that no right element equal to a left one jumps ahead of it.
    if src.keys[high - 1] < src.keys[low] {
        let right = high - mid;
        common::copy_pairs(src, dst, mid, low, right);
        common::copy_pairs(src, dst, low, low + right, mid - low);
        return MergePath::Swapped;
    }

    common::merge_ranges(src, dst, low, mid, high);
    MergePath::Merged
}
