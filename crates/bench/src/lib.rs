use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset for an input of `size` elements.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input for one presorted-prefix sort call.
///
/// `aux_keys[..split]` holds a sorted prefix, `keys[split..]` an unsorted
/// suffix. Payloads are the original positions.
#[derive(Clone, Debug)]
pub struct PrefixWorkload {
    pub keys: Vec<i32>,
    pub payloads: Vec<i32>,
    pub aux_keys: Vec<i32>,
    pub aux_payloads: Vec<i32>,
    pub split: usize,
}

impl PrefixWorkload {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Uniform keys in `0..key_range`, payloads `0..len`.
pub fn random_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    key_range: i32,
) -> (Vec<i32>, Vec<i32>) {
    let keys = (0..len).map(|_| rng.random_range(0..key_range)).collect();
    let payloads = (0..len as i32).collect();
    (keys, payloads)
}

/// Scan-line crossings: `len` keys of which the first `presorted_pct` percent
/// carry over sorted from the previous line and the rest are new.
pub fn prefix_workload<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    presorted_pct: usize,
    key_range: i32,
) -> PrefixWorkload {
    let split = len * presorted_pct.min(100) / 100;
    let (keys, payloads) = random_pairs(rng, len, key_range);

    let mut prefix = keys[..split]
        .iter()
        .copied()
        .zip(0..)
        .collect::<Vec<(i32, i32)>>();
    prefix.sort_by_key(|&(k, _)| k);

    let mut aux_keys = vec![0; len];
    let mut aux_payloads = vec![0; len];
    for (i, (k, p)) in prefix.into_iter().enumerate() {
        aux_keys[i] = k;
        aux_payloads[i] = p;
    }

    PrefixWorkload {
        keys,
        payloads,
        aux_keys,
        aux_payloads,
        split,
    }
}
