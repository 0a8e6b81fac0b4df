//! Request handling for front ends that pass a binary string and a mode name.
//!
//! Front ends never decode anything themselves: they hand the two strings to
//! [`handle_conversion_request`] and forward the resulting payload. Unknown
//! mode names select [`ConversionMode::Standard`], and engine failures are
//! carried as the payload's `error` text.

use binhex_core::{ConversionMode, ProcessorSimulator};
use serde::Serialize;
use tracing::{debug, warn};

/// Which engine path serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionStrategy {
    /// Whole-string decode on the calling thread.
    #[default]
    Sequential,
    /// Chunked decode fanned out across the engine's worker count.
    Parallel,
}

/// Response payload serialized as `{"hex": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConversionResponse {
    /// Successful conversion.
    Hex {
        /// Uppercase hexadecimal output.
        hex: String,
    },
    /// Engine failure, rendered as its message.
    Error {
        /// Human-readable failure text.
        error: String,
    },
}

impl ConversionResponse {
    /// Returns `true` for the success payload.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Hex { .. })
    }

    /// Serializes the payload as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Maps a free-text mode name onto a conversion mode.
///
/// Names are matched exactly; anything unrecognized selects
/// [`ConversionMode::Standard`].
#[must_use]
pub fn resolve_mode(mode_name: &str) -> ConversionMode {
    let mode = ConversionMode::from_name_or_standard(mode_name);
    if mode.as_str() != mode_name {
        warn!(mode_name, "unrecognized mode name, using STANDARD");
    }
    mode
}

/// Converts `binary` under the named mode and wraps the outcome as a payload.
#[must_use]
pub fn handle_conversion_request(
    simulator: &ProcessorSimulator,
    binary: &str,
    mode_name: &str,
    strategy: ConversionStrategy,
) -> ConversionResponse {
    let mode = resolve_mode(mode_name);
    debug!(%mode, ?strategy, bits = binary.len(), "handling conversion request");

    let result = match strategy {
        ConversionStrategy::Sequential => ProcessorSimulator::binary_to_hex(binary, mode),
        ConversionStrategy::Parallel => simulator.multi_threaded_binary_to_hex(binary, mode),
    };

    match result {
        Ok(hex) => ConversionResponse::Hex { hex },
        Err(error) => ConversionResponse::Error {
            error: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_conversion_request, resolve_mode, ConversionResponse, ConversionStrategy};
    use binhex_core::{ConversionMode, EngineConfig, ProcessorSimulator};

    #[test]
    fn mode_names_resolve_exactly() {
        assert_eq!(resolve_mode("SIGNED"), ConversionMode::Signed);
        assert_eq!(resolve_mode("UNSIGNED"), ConversionMode::Unsigned);
        assert_eq!(
            resolve_mode("FLOATING_POINT"),
            ConversionMode::FloatingPoint
        );
        assert_eq!(resolve_mode("STANDARD"), ConversionMode::Standard);
        assert_eq!(resolve_mode("octal"), ConversionMode::Standard);
    }

    #[test]
    fn success_serializes_as_hex_payload() {
        let simulator = ProcessorSimulator::new();
        let response = handle_conversion_request(
            &simulator,
            "11110000",
            "SIGNED",
            ConversionStrategy::Sequential,
        );

        assert!(response.is_ok());
        assert_eq!(
            response.to_json().expect("serializable"),
            r#"{"hex":"FFFFFFF0"}"#
        );
    }

    #[test]
    fn failure_serializes_as_error_payload() {
        let simulator = ProcessorSimulator::new();
        let response = handle_conversion_request(
            &simulator,
            "10102",
            "STANDARD",
            ConversionStrategy::Sequential,
        );

        assert_eq!(
            response,
            ConversionResponse::Error {
                error: "Invalid binary input: must contain only 0s and 1s".to_string()
            }
        );
        assert_eq!(
            response.to_json().expect("serializable"),
            r#"{"error":"Invalid binary input: must contain only 0s and 1s"}"#
        );
    }

    #[test]
    fn unknown_mode_falls_back_to_standard_output() {
        let simulator = ProcessorSimulator::new();
        let response = handle_conversion_request(
            &simulator,
            "11110000",
            "HEX",
            ConversionStrategy::Sequential,
        );

        assert_eq!(
            response,
            ConversionResponse::Hex {
                hex: "F0".to_string()
            }
        );
    }

    #[test]
    fn parallel_strategy_uses_chunked_path() {
        let simulator = ProcessorSimulator::with_config(EngineConfig::with_worker_count(2));
        let response = handle_conversion_request(
            &simulator,
            "1111000000001010",
            "SIGNED",
            ConversionStrategy::Parallel,
        );

        assert_eq!(
            response,
            ConversionResponse::Hex {
                hex: "FFFFFFF0A".to_string()
            }
        );
    }
}
