//! Chunked fan-out of the mode decoder across worker tasks.
//!
//! The normalized input is cut into contiguous, nibble-aligned chunks. Each
//! chunk is decoded in isolation by its own task, which owns exactly one output
//! slot; the caller blocks until every task has finished and the slots are
//! concatenated in chunk order. No sign or exponent state crosses a chunk
//! boundary, so only the nibble-remap modes are guaranteed to match the
//! sequential decoder.

use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, trace};

use crate::bits::{ensure_binary, normalize, NIBBLE_BITS};
use crate::decoder::decode;
use crate::{ConversionMode, Result};

/// Worker count used when the platform cannot report its parallelism.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Resolves the number of chunks to decode concurrently.
///
/// A configured count is clamped to at least one. Without one, the platform's
/// available parallelism is used, falling back to [`DEFAULT_WORKER_COUNT`].
#[must_use]
pub fn resolve_worker_count(configured: Option<usize>) -> usize {
    configured.map_or_else(platform_worker_count, |count| count.max(1))
}

fn platform_worker_count() -> usize {
    thread::available_parallelism().map_or(DEFAULT_WORKER_COUNT, NonZeroUsize::get)
}

/// Splits `normalized` into exactly `worker_count` contiguous chunks.
///
/// Every chunk but the last holds `nibbles / worker_count` whole nibbles and
/// the last chunk absorbs the remainder, so leading chunks may be empty when
/// the input has fewer nibbles than workers. A `worker_count` of zero is
/// treated as one.
#[must_use]
pub fn partition(normalized: &str, worker_count: usize) -> Vec<&str> {
    let workers = worker_count.max(1);
    let chunk_len = (normalized.len() / NIBBLE_BITS / workers) * NIBBLE_BITS;

    (0..workers)
        .map(|index| {
            let start = index * chunk_len;
            let end = if index + 1 == workers {
                normalized.len()
            } else {
                start + chunk_len
            };
            &normalized[start..end]
        })
        .collect()
}

/// Decodes `bits` under `mode` using `worker_count` concurrent chunk tasks.
///
/// The whole input is validated before any task is spawned. If a chunk fails,
/// the first failure in chunk order is returned and no partial output is
/// produced.
///
/// # Errors
///
/// Returns [`crate::ConversionError::InvalidBinaryInput`] when `bits`
/// contains a character other than `0` or `1`.
pub fn decode_parallel(bits: &str, mode: ConversionMode, worker_count: usize) -> Result<String> {
    ensure_binary(bits)?;
    let normalized = normalize(bits);
    let chunks = partition(&normalized, worker_count);
    debug!(
        bits = normalized.len(),
        workers = chunks.len(),
        %mode,
        "fanning out chunked decode"
    );

    let mut slots: Vec<Result<String>> = chunks.iter().map(|_| Ok(String::new())).collect();
    rayon::scope(|scope| {
        for (index, (chunk, slot)) in chunks.iter().zip(slots.iter_mut()).enumerate() {
            scope.spawn(move |_| {
                trace!(index, bits = chunk.len(), "decoding chunk");
                *slot = decode(chunk, mode);
            });
        }
    });

    let mut hex = String::with_capacity(normalized.len() / NIBBLE_BITS);
    for slot in slots {
        hex.push_str(&slot?);
    }
    Ok(hex)
}
