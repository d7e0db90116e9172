use crate::PairBuf;

/// Stable insertion sort of `dst[low..high]`, moving payloads with their keys.
#[inline]
pub fn insertion_sort(dst: &mut PairBuf<'_>, low: usize, high: usize) {
    if high - low < 2 {
        return;
    }

    let keys = &mut dst.keys[low..high];
    let payloads = &mut dst.payloads[low..high];

    for i in 1..keys.len() {
        let x = keys[i];
        if keys[i - 1] <= x {
            continue;
        }

        let y = payloads[i];
        let mut j = i;
        // Strict `>` so equal keys never pass each other.
        while j > 0 && keys[j - 1] > x {
            keys[j] = keys[j - 1];
            payloads[j] = payloads[j - 1];
            j -= 1;
        }
        keys[j] = x;
        payloads[j] = y;
    }
}

/// Index `i` of the first descent `keys[i - 1] > keys[i]`, if any.
#[inline]
pub fn first_descent(keys: &[i32]) -> Option<usize> {
    keys.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

#[inline]
pub fn is_sorted_non_decreasing(keys: &[i32]) -> bool {
    first_descent(keys).is_none()
}

/// Copies `len` pairs from `src[src_at..]` to `dst[dst_at..]`.
#[inline]
pub fn copy_pairs(
    src: &PairBuf<'_>,
    dst: &mut PairBuf<'_>,
    src_at: usize,
    dst_at: usize,
    len: usize,
) {
    dst.keys[dst_at..dst_at + len].copy_from_slice(&src.keys[src_at..src_at + len]);
    dst.payloads[dst_at..dst_at + len].copy_from_slice(&src.payloads[src_at..src_at + len]);
}

/// Merges the sorted runs `src[left..mid]` and `src[mid..right]` into `dst[left..right]`.
///
/// Ties take the left run first, which keeps the merge stable.
#[inline]
pub fn merge_ranges(
    src: &PairBuf<'_>,
    dst: &mut PairBuf<'_>,
    left: usize,
    mid: usize,
    right: usize,
) {
    let mut p = left;
    let mut q = mid;
    let mut k = left;

    while p < mid && q < right {
        if src.keys[p] <= src.keys[q] {
            dst.keys[k] = src.keys[p];
            dst.payloads[k] = src.payloads[p];
            p += 1;
        } else {
            dst.keys[k] = src.keys[q];
            dst.payloads[k] = src.payloads[q];
            q += 1;
        }
        k += 1;
    }

    if p < mid {
        copy_pairs(src, dst, p, k, mid - p);
    } else if q < right {
        copy_pairs(src, dst, q, k, right - q);
    }
}
