//! Stable merge sort of `(key, payload)` pairs stored as parallel `i32` arrays.
//!
//! Two buffer pairs take part in every call: the *primary* pair, which holds
//! the input and receives the sorted output, and the *auxiliary* pair, used as
//! ping-pong scratch space. [`sort_with_presorted_prefix`] additionally takes a
//! split index: `[from, split)` is already sorted in the auxiliary pair and
//! only `[split, to)` of the primary pair needs sorting before the two runs
//! are fused.
//!
//! Indices and buffer lengths are checked up front; a rejected call returns
//! [`SortError`] and leaves every buffer untouched.

mod algorithms;
mod context;
mod error;
mod stats;
mod validate;

use log::trace;

pub use algorithms::presorted_prefix::FusionPath;
pub use context::SortContext;
pub use error::{Result, SortError};
pub use stats::{NoStats, RecordedSort, SortRecorder, SortSample, SortStatsSink};

/// Ranges at or below this length are insertion sorted.
pub const INSERTION_THRESHOLD: usize = 16;

/// General path used when the presorted prefix and the sorted suffix overlap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FusionStrategy {
    /// Plain two-cursor merge over the whole range.
    #[default]
    Linear,
    /// Binary-search the prefix for the first key above the suffix head, copy
    /// everything before it as one block and merge the rest.
    SkipPrefixRun,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub fusion: FusionStrategy,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: INSERTION_THRESHOLD,
    fusion: FusionStrategy::Linear,
};

impl Default for TunedParams {
    fn default() -> Self {
        TUNED_PARAMS
    }
}

impl TunedParams {
    /// A zero threshold would recurse on single elements forever.
    #[inline]
    pub(crate) fn effective_threshold(&self) -> usize {
        self.insertion_threshold.max(1)
    }
}

/// Borrowed key and payload arrays indexed in lockstep.
#[derive(Debug)]
pub struct PairBuf<'a> {
    pub keys: &'a mut [i32],
    pub payloads: &'a mut [i32],
}

impl<'a> PairBuf<'a> {
    pub fn new(keys: &'a mut [i32], payloads: &'a mut [i32]) -> Self {
        Self { keys, payloads }
    }
}

/// Sorts `primary[from..to]` from scratch; the result is left in `primary`.
///
/// `aux[from..to]` is used as scratch and is unspecified afterwards.
pub fn sort(
    primary: &mut PairBuf<'_>,
    aux: &mut PairBuf<'_>,
    from: usize,
    to: usize,
) -> Result<()> {
    sort_with_params(primary, aux, from, to, &TUNED_PARAMS, &mut NoStats)
}

pub fn sort_with_params(
    primary: &mut PairBuf<'_>,
    aux: &mut PairBuf<'_>,
    from: usize,
    to: usize,
    params: &TunedParams,
    stats: &mut dyn SortStatsSink,
) -> Result<()> {
    validate::check_range(primary, aux, from, to, from)?;
    stats.record(&SortSample {
        prefix_keys: &[],
        suffix_keys: &primary.keys[from..to],
        from,
        to,
        split: from,
    });

    if algorithms::common::is_sorted_non_decreasing(&primary.keys[from..to]) {
        trace!("sort [{from}, {to}): already sorted");
        return Ok(());
    }

    algorithms::common::copy_pairs(primary, aux, from, from, to - from);
    let threshold = params.effective_threshold();
    let path = algorithms::ping_pong_merge_sort::sort(aux, primary, from, to, threshold);
    trace!("sort [{from}, {to}): ping-pong merge, top level {path:?}");
    Ok(())
}

/// Sorts `[from, to)` given that `aux[from..split]` is already sorted and
/// `primary[split..to]` is not; the result is left in `primary`.
///
/// `primary[from..split]` is never read. `aux[from..to]` is unspecified
/// afterwards.
pub fn sort_with_presorted_prefix(
    primary: &mut PairBuf<'_>,
    aux: &mut PairBuf<'_>,
    from: usize,
    to: usize,
    split: usize,
) -> Result<FusionPath> {
    sort_with_presorted_prefix_with_params(
        primary,
        aux,
        from,
        to,
        split,
        &TUNED_PARAMS,
        &mut NoStats,
    )
}

pub fn sort_with_presorted_prefix_with_params(
    primary: &mut PairBuf<'_>,
    aux: &mut PairBuf<'_>,
    from: usize,
    to: usize,
    split: usize,
    params: &TunedParams,
    stats: &mut dyn SortStatsSink,
) -> Result<FusionPath> {
    validate::check_range(primary, aux, from, to, split)?;
    validate::check_prefix_sorted(aux.keys, from, split)?;
    stats.record(&SortSample {
        prefix_keys: &aux.keys[from..split],
        suffix_keys: &primary.keys[split..to],
        from,
        to,
        split,
    });

    let path = algorithms::presorted_prefix::sort(primary, aux, from, to, split, params);
    trace!("sort [{from}, {to}) with prefix up to {split}: {path:?}");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    struct Buffers {
        keys: Vec<i32>,
        payloads: Vec<i32>,
        aux_keys: Vec<i32>,
        aux_payloads: Vec<i32>,
    }

    impl Buffers {
        fn new(keys: &[i32], payloads: &[i32]) -> Self {
            Self {
                keys: keys.to_vec(),
                payloads: payloads.to_vec(),
                aux_keys: vec![0; keys.len()],
                aux_payloads: vec![0; keys.len()],
            }
        }

        fn tagged(keys: &[i32]) -> Self {
            let payloads = (0..keys.len() as i32).collect::<Vec<_>>();
            Self::new(keys, &payloads)
        }

        fn sort(&mut self, from: usize, to: usize) -> Result<()> {
            sort(
                &mut PairBuf::new(&mut self.keys, &mut self.payloads),
                &mut PairBuf::new(&mut self.aux_keys, &mut self.aux_payloads),
                from,
                to,
            )
        }

        fn sort_presorted(&mut self, from: usize, to: usize, split: usize) -> Result<FusionPath> {
            sort_with_presorted_prefix(
                &mut PairBuf::new(&mut self.keys, &mut self.payloads),
                &mut PairBuf::new(&mut self.aux_keys, &mut self.aux_payloads),
                from,
                to,
                split,
            )
        }
    }

    fn assert_stable_sorted_like_std(input: &[i32]) {
        let mut buffers = Buffers::tagged(input);
        buffers.sort(0, input.len()).unwrap();

        let mut expected = Vec::with_capacity(input.len());
        for (i, &k) in input.iter().enumerate() {
            expected.push((k, i as i32));
        }
        expected.sort_by_key(|&(k, _)| k);

        let mut actual = Vec::with_capacity(input.len());
        for (&k, &p) in buffers.keys.iter().zip(&buffers.payloads) {
            actual.push((k, p));
        }
        assert_eq!(actual, expected, "input_len={}", input.len());
    }

    #[test]
    fn scenario_plain_sort() {
        let mut buffers = Buffers::new(&[5, 3, 8, 1], &[50, 30, 80, 10]);
        buffers.sort(0, 4).unwrap();
        assert_eq!(buffers.keys, [1, 3, 5, 8]);
        assert_eq!(buffers.payloads, [10, 30, 50, 80]);
    }

    #[test]
    fn scenario_split_at_zero() {
        let mut buffers = Buffers::new(&[5, 3, 8, 1], &[50, 30, 80, 10]);
        let path = buffers.sort_presorted(0, 4, 0);
        assert_eq!(path, Ok(FusionPath::Concatenated));
        assert_eq!(buffers.keys, [1, 3, 5, 8]);
        assert_eq!(buffers.payloads, [10, 30, 50, 80]);
    }

    #[test]
    fn scenario_presorted_prefix() {
        let mut buffers = Buffers::new(&[0, 0, 0, 7, 2, 5], &[0, 0, 0, 70, 20, 50]);
        buffers.aux_keys[..3].copy_from_slice(&[1, 4, 9]);
        buffers.aux_payloads[..3].copy_from_slice(&[10, 40, 90]);

        assert_eq!(buffers.sort_presorted(0, 6, 3), Ok(FusionPath::Merged));
        assert_eq!(buffers.keys, [1, 2, 4, 5, 7, 9]);
        assert_eq!(buffers.payloads, [10, 20, 40, 50, 70, 90]);
    }

    #[test]
    fn scenario_inverted_halves_with_small_threshold() {
        let mut keys = vec![6, 7, 8, 1, 2, 3];
        let mut payloads = vec![0, 1, 2, 3, 4, 5];
        let mut aux_keys = vec![0; 6];
        let mut aux_payloads = vec![0; 6];
        let params = TunedParams {
            insertion_threshold: 3,
            ..TUNED_PARAMS
        };
        sort_with_params(
            &mut PairBuf::new(&mut keys, &mut payloads),
            &mut PairBuf::new(&mut aux_keys, &mut aux_payloads),
            0,
            6,
            &params,
            &mut NoStats,
        )
        .unwrap();
        assert_eq!(keys, [1, 2, 3, 6, 7, 8]);
        assert_eq!(payloads, [3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i32::MIN, 1, i32::MAX, 0, i32::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_stable_sorted_like_std(case);
        }
    }

    #[test]
    fn threshold_boundaries() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let t = INSERTION_THRESHOLD;
        for len in [t - 1, t, t + 1] {
            let input = (0..len)
                .map(|_| rng.random_range(-4..4))
                .collect::<Vec<i32>>();
            assert_stable_sorted_like_std(&input);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let input = (0..size).map(|_| rng.random::<i32>()).collect::<Vec<_>>();
            assert_stable_sorted_like_std(&input);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let input = (0..size)
                .map(|_| rng.random_range(0..16) * 17)
                .collect::<Vec<i32>>();
            assert_stable_sorted_like_std(&input);
        }
    }

    #[test]
    fn sorted_input_is_left_untouched() {
        let keys = [1, 1, 2, 3, 5, 8, 13, 21];
        let mut buffers = Buffers::tagged(&keys);
        buffers.aux_keys.fill(-1);
        buffers.sort(0, keys.len()).unwrap();
        assert_eq!(buffers.keys, keys);
        assert_eq!(buffers.payloads, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(buffers.aux_keys.iter().all(|&k| k == -1));
    }

    #[test]
    fn only_the_range_is_written() {
        let mut buffers = Buffers::tagged(&[9, 9, 4, 3, 2, 1, 0, 0]);
        buffers.aux_keys.fill(-7);
        buffers.aux_payloads.fill(-7);
        buffers.sort(2, 6).unwrap();
        assert_eq!(buffers.keys, [9, 9, 1, 2, 3, 4, 0, 0]);
        assert_eq!(buffers.payloads, [0, 1, 5, 4, 3, 2, 6, 7]);
        assert_eq!(buffers.aux_keys[..2], [-7, -7]);
        assert_eq!(buffers.aux_keys[6..], [-7, -7]);
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let mut buffers = Buffers::tagged(&[3, 2, 1]);
        buffers.sort(1, 1).unwrap();
        let path = buffers.sort_presorted(2, 2, 2);
        assert_eq!(path, Ok(FusionPath::Concatenated));
        assert_eq!(buffers.keys, [3, 2, 1]);
        assert_eq!(buffers.payloads, [0, 1, 2]);
    }

    #[test]
    fn invalid_arguments_leave_buffers_untouched() {
        let mut buffers = Buffers::tagged(&[3, 2, 1, 0]);
        buffers.aux_keys.copy_from_slice(&[4, 1, 0, 0]);
        let before_keys = buffers.keys.clone();
        let before_aux = buffers.aux_keys.clone();

        let expected = SortError::InvalidRange {
            from: 3,
            split: 3,
            to: 1,
        };
        assert_eq!(buffers.sort(3, 1), Err(expected));

        let expected = SortError::BufferTooShort {
            buffer: "keys",
            len: 4,
            required: 5,
        };
        assert_eq!(buffers.sort(0, 5), Err(expected));

        let expected = SortError::UnsortedPrefix { index: 1 };
        assert_eq!(buffers.sort_presorted(0, 4, 2), Err(expected));

        let expected = SortError::InvalidRange {
            from: 0,
            split: 3,
            to: 2,
        };
        assert_eq!(buffers.sort_presorted(0, 2, 3), Err(expected));

        assert_eq!(buffers.keys, before_keys);
        assert_eq!(buffers.aux_keys, before_aux);
    }

    #[test]
    fn stats_sink_sees_raw_inputs() {
        let mut keys = vec![0, 0, 8, 6, 7];
        let mut payloads = vec![0; 5];
        let mut aux_keys = vec![2, 5, 0, 0, 0];
        let mut aux_payloads = vec![0; 5];
        let mut recorder = SortRecorder::new();

        sort_with_presorted_prefix_with_params(
            &mut PairBuf::new(&mut keys, &mut payloads),
            &mut PairBuf::new(&mut aux_keys, &mut aux_payloads),
            0,
            5,
            2,
            &TUNED_PARAMS,
            &mut recorder,
        )
        .unwrap();

        assert_eq!(keys, [2, 5, 6, 7, 8]);
        let expected = RecordedSort {
            keys: vec![2, 5, 8, 6, 7],
            from: 0,
            to: 5,
            split: 2,
        };
        assert_eq!(recorder.samples(), [expected]);
    }

    #[test]
    fn rejected_calls_are_not_recorded() {
        let mut keys = vec![1, 0];
        let mut payloads = vec![0, 0];
        let mut aux_keys = vec![0];
        let mut aux_payloads = vec![0];
        let mut recorder = SortRecorder::new();

        let result = sort_with_params(
            &mut PairBuf::new(&mut keys, &mut payloads),
            &mut PairBuf::new(&mut aux_keys, &mut aux_payloads),
            0,
            2,
            &TUNED_PARAMS,
            &mut recorder,
        );
        let expected = SortError::BufferTooShort {
            buffer: "aux_keys",
            len: 1,
            required: 2,
        };
        assert_eq!(result, Err(expected));
        assert_eq!(recorder.calls(), 0);
    }

    #[test]
    fn zero_threshold_still_terminates() {
        let mut keys = vec![3, 1, 2];
        let mut payloads = vec![0, 1, 2];
        let mut aux_keys = vec![0; 3];
        let mut aux_payloads = vec![0; 3];
        let params = TunedParams {
            insertion_threshold: 0,
            ..TUNED_PARAMS
        };
        sort_with_params(
            &mut PairBuf::new(&mut keys, &mut payloads),
            &mut PairBuf::new(&mut aux_keys, &mut aux_payloads),
            0,
            3,
            &params,
            &mut NoStats,
        )
        .unwrap();
        assert_eq!(keys, [1, 2, 3]);
        assert_eq!(payloads, [1, 2, 0]);
    }
}
