use thiserror::Error;

/// Coarse error categories, one per [`ConversionError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ErrorKind {
    /// A character other than `0` or `1` was present in the input.
    InvalidBinaryInput,
    /// The instruction stub was called with empty text.
    EmptyInstruction,
    /// A register lookup named a register that was never set or was reset.
    RegisterNotFound,
}

/// Failures raised by the conversion engine and its register store.
///
/// The `Display` text is the message forwarded verbatim to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ConversionError {
    /// Input contained a character outside `{0, 1}`.
    #[error("Invalid binary input: must contain only 0s and 1s")]
    InvalidBinaryInput,
    /// `execute_instruction` was given empty text.
    #[error("Empty instruction")]
    EmptyInstruction,
    /// Lookup of a register that holds no value.
    #[error("Register not found: {name}")]
    RegisterNotFound {
        /// Name that was looked up.
        name: String,
    },
}

impl ConversionError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBinaryInput => ErrorKind::InvalidBinaryInput,
            Self::EmptyInstruction => ErrorKind::EmptyInstruction,
            Self::RegisterNotFound { .. } => ErrorKind::RegisterNotFound,
        }
    }
}

/// Result alias used across the engine.
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;
