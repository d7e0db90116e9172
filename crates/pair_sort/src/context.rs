use crate::error::Result;
use crate::{
    FusionPath, NoStats, PairBuf, SortStatsSink, TunedParams, sort_with_params,
    sort_with_presorted_prefix_with_params, validate,
};

/// Owned auxiliary pair plus tuning, reused across calls.
///
/// Keep one per thread; the auxiliary storage only grows.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub aux_keys: Vec<i32>,
    pub aux_payloads: Vec<i32>,
    pub params: TunedParams,
}

impl SortContext {
    pub fn new(params: TunedParams) -> Self {
        Self {
            aux_keys: Vec::new(),
            aux_payloads: Vec::new(),
            params,
        }
    }

    #[inline]
    pub(crate) fn ensure_aux(&mut self, len: usize) -> PairBuf<'_> {
        if self.aux_keys.len() < len {
            self.aux_keys.resize(len, 0);
            self.aux_payloads.resize(len, 0);
        }
        PairBuf::new(&mut self.aux_keys[..len], &mut self.aux_payloads[..len])
    }

    /// Sorts all of `keys`, moving `payloads` along with them.
    pub fn sort_pairs(&mut self, keys: &mut [i32], payloads: &mut [i32]) -> Result<()> {
        self.sort_pairs_with_sink(keys, payloads, &mut NoStats)
    }

    pub fn sort_pairs_with_sink(
        &mut self,
        keys: &mut [i32],
        payloads: &mut [i32],
        stats: &mut dyn SortStatsSink,
    ) -> Result<()> {
        validate::check_slices(keys, payloads, 0)?;
        let len = keys.len();
        let params = self.params;
        let mut aux = self.ensure_aux(len);
        sort_with_params(
            &mut PairBuf::new(keys, payloads),
            &mut aux,
            0,
            len,
            &params,
            stats,
        )
    }

    /// Sorts `keys` where `keys[..split]` is still sorted from an earlier
    /// call and only `keys[split..]` was appended since.
    pub fn sort_extended(
        &mut self,
        keys: &mut [i32],
        payloads: &mut [i32],
        split: usize,
    ) -> Result<FusionPath> {
        self.sort_extended_with_sink(keys, payloads, split, &mut NoStats)
    }

    pub fn sort_extended_with_sink(
        &mut self,
        keys: &mut [i32],
        payloads: &mut [i32],
        split: usize,
        stats: &mut dyn SortStatsSink,
    ) -> Result<FusionPath> {
        validate::check_slices(keys, payloads, split)?;

        // The prefix order is checked on the copy, so a rejection never
        // touches the caller's slices.
        let len = keys.len();
        let params = self.params;
        let mut aux = self.ensure_aux(len);
        aux.keys[..split].copy_from_slice(&keys[..split]);
        aux.payloads[..split].copy_from_slice(&payloads[..split]);
        sort_with_presorted_prefix_with_params(
            &mut PairBuf::new(keys, payloads),
            &mut aux,
            0,
            len,
            split,
            &params,
            stats,
        )
    }
}
