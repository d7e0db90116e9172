use log::debug;

use crate::PairBuf;
use crate::algorithms::common;
use crate::error::{Result, SortError};

/// Checks index order and that all four arrays cover `[0, to)`.
pub(crate) fn check_range(
    primary: &PairBuf<'_>,
    aux: &PairBuf<'_>,
    from: usize,
    to: usize,
    split: usize,
) -> Result<()> {
    if from > split || split > to {
        debug!("rejecting sort: from={from} split={split} to={to}");
        return Err(SortError::InvalidRange { from, split, to });
    }

    let buffers = [
        ("keys", primary.keys.len()),
        ("payloads", primary.payloads.len()),
        ("aux_keys", aux.keys.len()),
        ("aux_payloads", aux.payloads.len()),
    ];
    for (buffer, len) in buffers {
        check_len(buffer, len, to)?;
    }

    Ok(())
}

/// Checks a whole-slice call: `split <= keys.len()` and payloads cover the keys.
pub(crate) fn check_slices(keys: &[i32], payloads: &[i32], split: usize) -> Result<()> {
    let to = keys.len();
    if split > to {
        debug!("rejecting sort: split={split} past end {to}");
        let from = 0;
        return Err(SortError::InvalidRange { from, split, to });
    }
    check_len("payloads", payloads.len(), to)
}

/// Checks that `keys[from..split]` is ascending.
pub(crate) fn check_prefix_sorted(keys: &[i32], from: usize, split: usize) -> Result<()> {
    match common::first_descent(&keys[from..split]) {
        Some(offset) => {
            let index = from + offset;
            debug!("rejecting sort: prefix out of order at index {index}");
            Err(SortError::UnsortedPrefix { index })
        }
        None => Ok(()),
    }
}

fn check_len(buffer: &'static str, len: usize, required: usize) -> Result<()> {
    if len < required {
        debug!("rejecting sort: {buffer} len {len} < {required}");
        return Err(SortError::BufferTooShort {
            buffer,
            len,
            required,
        });
    }
    Ok(())
}
