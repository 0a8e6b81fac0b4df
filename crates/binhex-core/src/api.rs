//! Host-facing engine API consumed by the CLI, request handlers, and bindings.

use tracing::debug;

use crate::bits::is_binary;
use crate::parallel::{decode_parallel, resolve_worker_count};
use crate::{decoder, ConversionError, ConversionMode, RegisterStore, Result};

/// Immutable configuration for an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineConfig {
    /// Chunk count for [`ProcessorSimulator::multi_threaded_binary_to_hex`].
    ///
    /// `None` selects the platform's available parallelism. Zero is treated
    /// as one.
    pub worker_count: Option<usize>,
}

impl EngineConfig {
    /// Returns a configuration with a fixed worker count.
    #[must_use]
    pub const fn with_worker_count(worker_count: usize) -> Self {
        Self {
            worker_count: Some(worker_count),
        }
    }
}

/// Conversion engine with its own register store.
///
/// Conversions are stateless; only the register operations mutate the
/// instance, and they require `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct ProcessorSimulator {
    config: EngineConfig,
    state: RegisterStore,
}

impl ProcessorSimulator {
    /// Creates an engine with default configuration and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            state: RegisterStore::new(),
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of chunks used by the multi-threaded conversion.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        resolve_worker_count(self.config.worker_count)
    }

    /// Returns `true` when `binary` contains only `0` and `1`.
    #[must_use]
    pub const fn validate_binary_input(binary: &str) -> bool {
        is_binary(binary)
    }

    /// Converts `binary` to hexadecimal text under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidBinaryInput`] when `binary` contains a
    /// character other than `0` or `1`.
    pub fn binary_to_hex(binary: &str, mode: ConversionMode) -> Result<String> {
        debug!(bits = binary.len(), %mode, "sequential conversion");
        decoder::decode(binary, mode)
    }

    /// Converts `binary` by decoding contiguous chunks concurrently.
    ///
    /// Output for [`ConversionMode::Standard`] and [`ConversionMode::Unsigned`]
    /// equals [`Self::binary_to_hex`]. Signed and floating-point chunks are
    /// interpreted independently of each other.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidBinaryInput`] when `binary` contains a
    /// character other than `0` or `1`.
    pub fn multi_threaded_binary_to_hex(
        &self,
        binary: &str,
        mode: ConversionMode,
    ) -> Result<String> {
        decode_parallel(binary, mode, self.worker_count())
    }

    /// Accepts an instruction for execution.
    ///
    /// Instruction semantics are not modelled; any non-empty text is accepted
    /// and has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::EmptyInstruction`] when `instruction` is
    /// empty.
    #[allow(clippy::unused_self)]
    pub fn execute_instruction(&self, instruction: &str) -> Result<()> {
        if instruction.is_empty() {
            return Err(ConversionError::EmptyInstruction);
        }
        debug!(instruction, "instruction accepted");
        Ok(())
    }

    /// Returns the register store.
    #[must_use]
    pub const fn state(&self) -> &RegisterStore {
        &self.state
    }

    /// Returns a mutable handle to the register store.
    pub const fn state_mut(&mut self) -> &mut RegisterStore {
        &mut self.state
    }

    /// Writes a register in the owned store.
    pub fn set_register(&mut self, name: impl Into<String>, value: u64) {
        self.state.set(name, value);
    }

    /// Reads a register from the owned store.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::RegisterNotFound`] when `name` holds no
    /// value.
    pub fn get_register(&self, name: &str) -> Result<u64> {
        self.state.get(name)
    }

    /// Clears every register in the owned store.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
