use crate::{FusionStrategy, PairBuf, TunedParams};

use super::{common, ping_pong_merge_sort};

/// How the prefix and the sorted suffix ended up in the primary pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FusionPath {
    /// The runs were already in global order and were copied as a block.
    Concatenated,
    /// The runs were merged element by element.
    Merged,
    /// A leading prefix run was copied as a block before merging the rest.
    SkippedPrefixRun { skipped: usize },
}

/// Sorts `primary[split..to]`, then fuses it with the sorted prefix held in
/// `aux[from..split]`. The result lands in `primary[from..to]`.
pub fn sort(
    primary: &mut PairBuf<'_>,
    aux: &mut PairBuf<'_>,
    from: usize,
    to: usize,
    split: usize,
    params: &TunedParams,
) -> FusionPath {
    common::copy_pairs(primary, aux, split, split, to - split);
    ping_pong_merge_sort::sort(primary, aux, split, to, params.effective_threshold());

    fuse(aux, primary, from, to, split, params.fusion)
}

fn fuse(
    src: &PairBuf<'_>,
    dst: &mut PairBuf<'_>,
    from: usize,
    to: usize,
    split: usize,
    fusion: FusionStrategy,
) -> FusionPath {
    if split == from || split == to || src.keys[split - 1] <= src.keys[split] {
        common::copy_pairs(src, dst, from, from, to - from);
        return FusionPath::Concatenated;
    }

    match fusion {
        FusionStrategy::Linear => {
            common::merge_ranges(src, dst, from, split, to);
            FusionPath::Merged
        }
        FusionStrategy::SkipPrefixRun => {
            let first = src.keys[split];
            let skipped = src.keys[from..split].partition_point(|&k| k <= first);
            let run_end = from + skipped;
            common::copy_pairs(src, dst, from, from, skipped);
            common::merge_ranges(src, dst, run_end, split, to);
            FusionPath::SkippedPrefixRun { skipped }
        }
    }
}
