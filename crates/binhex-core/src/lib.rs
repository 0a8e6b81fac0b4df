//! Binary-to-hexadecimal conversion engine with named-register bookkeeping.

/// Error taxonomy shared by every engine operation.
pub mod error;
pub use error::{ConversionError, ErrorKind, Result};

/// Binary-digit validation and nibble alignment.
pub mod bits;
pub use bits::{ensure_binary, high_bits, is_binary, low_bits, normalize, NIBBLE_BITS};

/// Conversion mode selection and external mode names.
pub mod mode;
pub use mode::ConversionMode;

/// Mode-specific decoding of binary strings into hexadecimal text.
pub mod decoder;
pub use decoder::{decode, render_scientific, FLOAT_WINDOW_BITS, SIGNED_WINDOW_BITS};

/// Concurrent chunked decoding.
pub mod parallel;
pub use parallel::{decode_parallel, partition, resolve_worker_count, DEFAULT_WORKER_COUNT};

/// Register store owned by an engine instance.
pub mod state;
pub use state::RegisterStore;

/// Host-facing engine API.
pub mod api;
pub use api::{EngineConfig, ProcessorSimulator};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
