//! Optional capture of sort inputs.
//!
//! A sink is handed to the `*_with_params` entry points and sees each call's
//! raw keys after validation and before any buffer is written. The default
//! entry points pass [`NoStats`].

/// Raw inputs of one sort call.
#[derive(Clone, Copy, Debug)]
pub struct SortSample<'a> {
    /// `aux_keys[from..split]`, the presorted prefix.
    pub prefix_keys: &'a [i32],
    /// `keys[split..to]`, the unsorted suffix.
    pub suffix_keys: &'a [i32],
    pub from: usize,
    pub to: usize,
    pub split: usize,
}

impl SortSample<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }
}

pub trait SortStatsSink {
    fn record(&mut self, sample: &SortSample<'_>);
}

impl<S: SortStatsSink + ?Sized> SortStatsSink for &mut S {
    #[inline]
    fn record(&mut self, sample: &SortSample<'_>) {
        (**self).record(sample);
    }
}

/// Sink that drops every sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStats;

impl SortStatsSink for NoStats {
    #[inline]
    fn record(&mut self, _sample: &SortSample<'_>) {}
}

/// Owned copy of a [`SortSample`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedSort {
    /// Keys of `[from, to)`: the prefix followed by the unsorted suffix.
    pub keys: Vec<i32>,
    pub from: usize,
    pub to: usize,
    pub split: usize,
}

impl RecordedSort {
    pub fn presorted_len(&self) -> usize {
        self.split - self.from
    }
}

impl From<&SortSample<'_>> for RecordedSort {
    fn from(sample: &SortSample<'_>) -> Self {
        let mut keys = Vec::with_capacity(sample.len());
        keys.extend_from_slice(sample.prefix_keys);
        keys.extend_from_slice(sample.suffix_keys);
        Self {
            keys,
            from: sample.from,
            to: sample.to,
            split: sample.split,
        }
    }
}

/// In-memory sink: counts every call and keeps up to `limit` samples.
#[derive(Clone, Debug, Default)]
pub struct SortRecorder {
    samples: Vec<RecordedSort>,
    limit: Option<usize>,
    calls: u64,
    total_len: u64,
    total_presorted: u64,
}

impl SortRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` samples; counters still cover every call.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn samples(&self) -> &[RecordedSort] {
        &self.samples
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    pub fn total_presorted(&self) -> u64 {
        self.total_presorted
    }

    /// Fraction of all recorded elements that arrived presorted.
    pub fn presorted_ratio(&self) -> f64 {
        if self.total_len == 0 {
            0.0
        } else {
            self.total_presorted as f64 / self.total_len as f64
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.calls = 0;
        self.total_len = 0;
        self.total_presorted = 0;
    }
}

impl SortStatsSink for SortRecorder {
    fn record(&mut self, sample: &SortSample<'_>) {
        self.calls += 1;
        self.total_len += sample.len() as u64;
        self.total_presorted += sample.prefix_keys.len() as u64;

        if self.limit.is_none_or(|limit| self.samples.len() < limit) {
            self.samples.push(RecordedSort::from(sample));
        }
    }
}
