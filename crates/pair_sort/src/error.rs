//! Error type for rejected sort calls.

use thiserror::Error;

/// Result type alias for sort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// A call whose indices or buffers break the sort's preconditions.
///
/// Every variant is raised before any buffer is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Indices are not ordered as `from <= split <= to`
    #[error("Invalid range: from={from}, split={split}, to={to}")]
    InvalidRange {
        /// Start of the sorted range
        from: usize,
        /// End of the presorted prefix
        split: usize,
        /// End of the sorted range
        to: usize,
    },

    /// One of the four arrays cannot hold `[0, to)`
    #[error("Buffer '{buffer}' has length {len}, needs at least {required}")]
    BufferTooShort {
        /// Which array: "keys", "payloads", "aux_keys" or "aux_payloads"
        buffer: &'static str,
        /// Actual length
        len: usize,
        /// Required length (`to`)
        required: usize,
    },

    /// The auxiliary prefix that should already be sorted is not
    #[error("Presorted prefix is out of order at index {index}")]
    UnsortedPrefix {
        /// First index `i` with `aux_keys[i - 1] > aux_keys[i]`
        index: usize,
    },
}
