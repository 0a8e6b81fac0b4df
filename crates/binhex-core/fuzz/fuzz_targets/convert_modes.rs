#![no_main]

use binhex_core::{
    decode, decode_parallel, is_binary, normalize, ConversionError, ConversionMode,
    ProcessorSimulator,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mode = ConversionMode::ALL[usize::from(data[0] % 4)];
    let workers = usize::from(data[1] % 16);
    let raw = String::from_utf8_lossy(&data[2..]);

    let valid = is_binary(&raw);
    let sequential = ProcessorSimulator::binary_to_hex(&raw, mode);
    let chunked = decode_parallel(&raw, mode, workers);

    if !valid {
        assert_eq!(sequential, Err(ConversionError::InvalidBinaryInput));
        assert_eq!(chunked, Err(ConversionError::InvalidBinaryInput));
        return;
    }

    let normalized = normalize(&raw);
    assert_eq!(normalized.len() % 4, 0);
    assert_eq!(decode(&normalized, mode), sequential);

    if mode.is_nibble_remap() {
        assert_eq!(chunked, sequential);
    }

    // Mapping bytes onto binary digits exercises the valid path on every input.
    let bits: String = data[2..]
        .iter()
        .map(|byte| if byte & 1 == 1 { '1' } else { '0' })
        .collect();
    let hex = ProcessorSimulator::binary_to_hex(&bits, mode).expect("mapped digits are binary");
    if !bits.is_empty() {
        assert!(!hex.is_empty());
    }
});
