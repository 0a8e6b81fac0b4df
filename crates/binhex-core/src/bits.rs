//! Binary-digit validation, nibble alignment, and fixed-width bit windows.

use std::borrow::Cow;

use crate::{ConversionError, Result};

/// Number of binary digits encoded by one hexadecimal digit.
pub const NIBBLE_BITS: usize = 4;

/// Returns `true` when every character of `bits` is `0` or `1`.
///
/// The empty string is vacuously valid.
#[must_use]
pub const fn is_binary(bits: &str) -> bool {
    let bytes = bits.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] != b'0' && bytes[index] != b'1' {
            return false;
        }
        index += 1;
    }
    true
}

/// Validates that `bits` contains only binary digits.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidBinaryInput`] when any character is
/// outside `{0, 1}`.
pub const fn ensure_binary(bits: &str) -> Result<()> {
    if is_binary(bits) {
        Ok(())
    } else {
        Err(ConversionError::InvalidBinaryInput)
    }
}

/// Left-pads `bits` with `0` until its length is a multiple of four.
///
/// Already-aligned input (including the empty string) is returned borrowed.
#[must_use]
pub fn normalize(bits: &str) -> Cow<'_, str> {
    let remainder = bits.len() % NIBBLE_BITS;
    if remainder == 0 {
        return Cow::Borrowed(bits);
    }

    let padding = NIBBLE_BITS - remainder;
    let mut padded = "0".repeat(padding);
    padded.push_str(bits);
    Cow::Owned(padded)
}

/// Reads the low-order `max_width` digits of a validated binary string as an
/// unsigned integer.
///
/// Returns the value together with the number of digits actually consumed,
/// which is `min(bits.len(), max_width)`. `max_width` is capped at 64.
#[must_use]
pub fn low_bits(bits: &str, max_width: usize) -> (u64, usize) {
    let width = bits.len().min(max_width).min(64);
    let window = &bits.as_bytes()[bits.len() - width..];
    let value = window
        .iter()
        .fold(0_u64, |acc, digit| (acc << 1) | u64::from(*digit == b'1'));
    (value, width)
}

/// Reads the high-order `max_width` digits of a validated binary string as an
/// unsigned integer, keeping the leading digit as the top bit of the window.
///
/// Returns the value together with the number of digits consumed, which is
/// `min(bits.len(), max_width)`. `max_width` is capped at 64.
#[must_use]
pub fn high_bits(bits: &str, max_width: usize) -> (u64, usize) {
    let width = bits.len().min(max_width).min(64);
    low_bits(&bits[..width], width)
}
