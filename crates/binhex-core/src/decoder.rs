//! Mode-specific decoding of normalized binary strings into hexadecimal text.
//!
//! Standard and unsigned decoding is a positional remap of each 4-bit group
//! to one hex digit and never performs arithmetic on the whole string. Signed
//! decoding reads at most 64 digits from the leading end of the string, and
//! floating-point decoding reads 32 digits from the low-order end; both render
//! the reinterpreted value.

use tracing::trace;

use crate::bits::{ensure_binary, high_bits, low_bits, normalize, NIBBLE_BITS};
use crate::{ConversionMode, Result};

/// Widest window read by signed decoding.
pub const SIGNED_WINDOW_BITS: usize = 64;

/// Window read by floating-point decoding (IEEE-754 single precision).
pub const FLOAT_WINDOW_BITS: usize = 32;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes a binary string under `mode`.
///
/// Input that is not nibble aligned is padded first, so callers may pass
/// either raw or normalized digits. Empty input renders as empty text in
/// every mode.
///
/// # Errors
///
/// Returns [`crate::ConversionError::InvalidBinaryInput`] when `bits`
/// contains a character other than `0` or `1`.
pub fn decode(bits: &str, mode: ConversionMode) -> Result<String> {
    ensure_binary(bits)?;
    let normalized = normalize(bits);
    trace!(bits = normalized.len(), %mode, "decoding binary string");

    if normalized.is_empty() {
        return Ok(String::new());
    }

    let hex = match mode {
        ConversionMode::Standard | ConversionMode::Unsigned => nibble_remap(&normalized),
        ConversionMode::Signed => decode_signed(&normalized),
        ConversionMode::FloatingPoint => decode_float(&normalized),
    };
    Ok(hex)
}

/// Renders each 4-digit group as a single uppercase hex digit.
fn nibble_remap(bits: &str) -> String {
    bits.as_bytes()
        .chunks(NIBBLE_BITS)
        .map(nibble_digit)
        .collect()
}

fn nibble_digit(group: &[u8]) -> char {
    let mut value = 0_usize;
    for digit in group {
        value = (value << 1) | usize::from(*digit == b'1');
    }
    char::from(HEX_DIGITS[value])
}

fn decode_signed(bits: &str) -> String {
    if !bits.starts_with('1') {
        return strip_leading_zeros(nibble_remap(bits));
    }

    // The leading digit is the sign bit, so wide input keeps its top 64 bits.
    let (raw, width) = high_bits(bits, SIGNED_WINDOW_BITS);
    let value = sign_extend(raw, width);

    // Negative values that fit 32 bits render in a 32-bit frame.
    i32::try_from(value).map_or_else(|_| format!("{value:X}"), |narrow| format!("{narrow:X}"))
}

/// Drops leading zero digits, keeping a single `0` for a zero value.
fn strip_leading_zeros(hex: String) -> String {
    let significant = hex.trim_start_matches('0');
    if significant.is_empty() {
        "0".to_string()
    } else if significant.len() == hex.len() {
        hex
    } else {
        significant.to_string()
    }
}

/// Sign-extends the low `width` bits of `raw` into a 64-bit signed value.
#[allow(clippy::cast_possible_truncation)]
const fn sign_extend(raw: u64, width: usize) -> i64 {
    let value = i64::from_ne_bytes(raw.to_ne_bytes());
    if width == 0 || width >= SIGNED_WINDOW_BITS {
        return value;
    }
    let shift = (SIGNED_WINDOW_BITS - width) as u32;
    (value << shift) >> shift
}

#[allow(clippy::cast_possible_truncation)]
fn decode_float(bits: &str) -> String {
    let (raw, _) = low_bits(bits, FLOAT_WINDOW_BITS);
    // The window is at most 32 bits wide.
    render_scientific(f32::from_bits(raw as u32))
}

/// Renders a float as `d.ddddddE±XX`, with uppercase non-finite names.
#[must_use]
pub fn render_scientific(value: f32) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_nan() {
        return format!("{sign}NAN");
    }
    if value.is_infinite() {
        return format!("{sign}INF");
    }

    let formatted = format!("{value:.6E}");
    let Some((mantissa, exponent)) = formatted.split_once('E') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{exponent_sign}{:02}", exponent.unsigned_abs())
}
