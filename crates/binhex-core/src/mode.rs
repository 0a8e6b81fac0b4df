//! Conversion mode selection and external mode names.

/// Interpretation applied to a normalized binary string during decoding.
///
/// The mode affects decoding only; validation and padding are identical for
/// every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ConversionMode {
    /// Positional nibble-to-hex-digit remap.
    #[default]
    Standard,
    /// Two's-complement interpretation when the leading bit is set.
    Signed,
    /// Explicit unsigned interpretation; same output as [`Self::Standard`].
    Unsigned,
    /// IEEE-754 single-precision reinterpretation of the low 32 bits.
    FloatingPoint,
}

impl ConversionMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Signed,
        Self::Unsigned,
        Self::FloatingPoint,
    ];

    /// Returns the external name used by request payloads and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Signed => "SIGNED",
            Self::Unsigned => "UNSIGNED",
            Self::FloatingPoint => "FLOATING_POINT",
        }
    }

    /// Resolves an exact external mode name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    /// Resolves an external mode name, treating anything unrecognized as
    /// [`Self::Standard`].
    #[must_use]
    pub fn from_name_or_standard(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Returns `true` for modes whose output is a pure per-nibble remap.
    #[must_use]
    pub const fn is_nibble_remap(self) -> bool {
        matches!(self, Self::Standard | Self::Unsigned)
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ConversionMode;

    #[test]
    fn names_roundtrip_for_every_mode() {
        for mode in ConversionMode::ALL {
            assert_eq!(ConversionMode::from_name(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_standard() {
        assert_eq!(ConversionMode::from_name("HEX"), None);
        assert_eq!(
            ConversionMode::from_name_or_standard("HEX"),
            ConversionMode::Standard
        );
        assert_eq!(
            ConversionMode::from_name_or_standard("signed"),
            ConversionMode::Standard
        );
        assert_eq!(
            ConversionMode::from_name_or_standard(""),
            ConversionMode::Standard
        );
        assert_eq!(
            ConversionMode::from_name_or_standard("FLOATING_POINT"),
            ConversionMode::FloatingPoint
        );
    }

    #[test]
    fn only_standard_and_unsigned_are_nibble_remaps() {
        assert!(ConversionMode::Standard.is_nibble_remap());
        assert!(ConversionMode::Unsigned.is_nibble_remap());
        assert!(!ConversionMode::Signed.is_nibble_remap());
        assert!(!ConversionMode::FloatingPoint.is_nibble_remap());
    }
}
