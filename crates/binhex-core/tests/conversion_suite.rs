//! Conversion engine suite: reference vectors, properties, and register lifecycle.

#![allow(clippy::pedantic, clippy::nursery)]

use binhex_core::{
    normalize, ConversionError, ConversionMode, EngineConfig, ErrorKind, ProcessorSimulator,
};
use proptest::prelude::*;
use rayon as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;
use tracing as _;

const TEN_AS_F32: &str = "01000001001000000000000000000000";

#[rstest]
#[case("1010", ConversionMode::Standard, "A")]
#[case("00001010", ConversionMode::Standard, "0A")]
#[case("11110000", ConversionMode::Standard, "F0")]
#[case("11110000", ConversionMode::Unsigned, "F0")]
#[case("11111111", ConversionMode::Unsigned, "FF")]
#[case("00001010", ConversionMode::Signed, "A")]
#[case("11110000", ConversionMode::Signed, "FFFFFFF0")]
#[case(TEN_AS_F32, ConversionMode::FloatingPoint, "1.000000E+01")]
fn reference_vectors(#[case] bits: &str, #[case] mode: ConversionMode, #[case] expected: &str) {
    assert_eq!(
        ProcessorSimulator::binary_to_hex(bits, mode).expect("valid binary input"),
        expected
    );
}

#[rstest]
#[case("10102")]
#[case("abc")]
#[case("1010 ")]
#[case("0b1010")]
fn invalid_input_is_rejected_by_both_paths(#[case] bits: &str) {
    let simulator = ProcessorSimulator::new();

    assert!(!ProcessorSimulator::validate_binary_input(bits));
    for mode in ConversionMode::ALL {
        let sequential = ProcessorSimulator::binary_to_hex(bits, mode);
        let parallel = simulator.multi_threaded_binary_to_hex(bits, mode);

        assert_eq!(sequential, Err(ConversionError::InvalidBinaryInput));
        assert_eq!(parallel, Err(ConversionError::InvalidBinaryInput));
    }
}

#[rstest]
#[case(format!("1000{}", "0".repeat(64)), "8000000000000000")]
#[case(format!("11110{}", "1".repeat(63)), "F7FFFFFFFFFFFFFF")]
#[case("1".repeat(72), "FFFFFFFF")]
fn signed_input_wider_than_64_bits_keeps_its_leading_sign(
    #[case] bits: String,
    #[case] expected: &str,
) {
    assert_eq!(
        ProcessorSimulator::binary_to_hex(&bits, ConversionMode::Signed),
        Ok(expected.to_string())
    );
}

#[test]
fn multi_threaded_conversion_of_long_input_is_not_empty() {
    let simulator = ProcessorSimulator::new();
    let bits = "101010101010101010101010101010101010101010";

    let hex = simulator
        .multi_threaded_binary_to_hex(bits, ConversionMode::Standard)
        .expect("valid binary input");

    assert!(!hex.is_empty());
    assert_eq!(hex, "2AAAAAAAAAA");
}

#[test]
fn register_lifecycle_matches_store_contract() {
    let mut simulator = ProcessorSimulator::new();
    let state = simulator.state_mut();

    state.set("R1", 42);
    assert_eq!(state.get("R1"), Ok(42));
    state.set("R2", 100);
    assert_eq!(state.get("R2"), Ok(100));

    state.reset();
    let error = state.get("R1").expect_err("reset clears registers");
    assert_eq!(error.kind(), ErrorKind::RegisterNotFound);
    assert_eq!(error.to_string(), "Register not found: R1");
}

#[test]
fn empty_instruction_is_rejected() {
    let simulator = ProcessorSimulator::new();

    let error = simulator
        .execute_instruction("")
        .expect_err("empty instruction must fail");
    assert_eq!(error, ConversionError::EmptyInstruction);
    assert_eq!(error.kind(), ErrorKind::EmptyInstruction);
}

fn binary_string(max_len: usize) -> impl Strategy<Value = String> {
    let digits = prop::collection::vec(prop::bool::ANY, 0..max_len);
    digits.prop_map(render_digits)
}

fn render_digits(digits: Vec<bool>) -> String {
    let mut bits = String::with_capacity(digits.len());
    for digit in digits {
        bits.push(if digit { '1' } else { '0' });
    }
    bits
}

proptest! {
    #[test]
    fn property_validation_rejects_any_foreign_character(
        prefix in binary_string(16),
        foreign in any::<char>().prop_filter("non-binary", |c| *c != '0' && *c != '1'),
        suffix in binary_string(16),
    ) {
        let bits = format!("{prefix}{foreign}{suffix}");
        prop_assert!(!ProcessorSimulator::validate_binary_input(&bits));
        prop_assert_eq!(
            ProcessorSimulator::binary_to_hex(&bits, ConversionMode::Standard),
            Err(ConversionError::InvalidBinaryInput)
        );
    }

    #[test]
    fn property_normalize_is_idempotent_and_aligned(bits in binary_string(96)) {
        let once = normalize(&bits).into_owned();
        let twice = normalize(&once).into_owned();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len() % 4, 0);
        prop_assert!(once.len() >= bits.len());
        prop_assert!(once.ends_with(bits.as_str()));
    }

    #[test]
    fn property_nibble_modes_are_chunk_boundary_independent(
        bits in binary_string(200),
        workers in 0_usize..12,
    ) {
        let simulator = ProcessorSimulator::with_config(EngineConfig::with_worker_count(workers));
        for mode in [ConversionMode::Standard, ConversionMode::Unsigned] {
            let sequential = ProcessorSimulator::binary_to_hex(&bits, mode);
            let parallel = simulator.multi_threaded_binary_to_hex(&bits, mode);
            prop_assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn property_standard_output_has_one_digit_per_nibble(bits in binary_string(128)) {
        let hex = ProcessorSimulator::binary_to_hex(&bits, ConversionMode::Standard).unwrap();

        prop_assert_eq!(hex.len(), bits.len().div_ceil(4));
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn property_floating_point_never_fails_on_wide_input(
        prefix in binary_string(32),
        pattern in any::<u32>(),
    ) {
        let bits = format!("{prefix}{pattern:032b}");
        let hex = ProcessorSimulator::binary_to_hex(&bits, ConversionMode::FloatingPoint).unwrap();

        prop_assert!(!hex.is_empty());
    }

    #[test]
    fn property_signed_negative_values_are_sign_extended(value in i32::MIN..0_i32) {
        let bits = format!("{value:032b}");
        let hex = ProcessorSimulator::binary_to_hex(&bits, ConversionMode::Signed).unwrap();

        prop_assert_eq!(hex, format!("{value:X}"));
    }

    #[test]
    fn property_leading_one_always_renders_negative(tail in binary_string(160)) {
        let fill = "0".repeat((4 - (tail.len() + 1) % 4) % 4);
        let bits = format!("1{tail}{fill}");
        let hex = ProcessorSimulator::binary_to_hex(&bits, ConversionMode::Signed).unwrap();

        prop_assert!(hex.len() == 8 || hex.len() == 16);
        prop_assert!(hex.starts_with(['8', '9', 'A', 'B', 'C', 'D', 'E', 'F']));
    }

    #[test]
    fn property_parallel_output_is_non_empty_for_non_empty_input(
        bits in binary_string(64).prop_filter("non-empty", |b| !b.is_empty()),
        mode_index in 0_usize..4,
    ) {
        let simulator = ProcessorSimulator::new();
        let mode = ConversionMode::ALL[mode_index];
        let hex = simulator.multi_threaded_binary_to_hex(&bits, mode).unwrap();

        prop_assert!(!hex.is_empty());
    }
}
