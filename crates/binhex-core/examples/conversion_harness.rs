//! Throughput harness comparing sequential and chunked conversion.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --release -p binhex-core --example conversion_harness
//! ```
//!
//! Each scenario converts a fixed-size binary string repeatedly for a fixed
//! wall-clock window and reports input bits converted per second. The chunked
//! path is also checked against the sequential path for nibble-remap modes.

#![allow(clippy::pedantic)]

use binhex_core::{ConversionMode, EngineConfig, ProcessorSimulator};
use proptest as _;
use rayon as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;
use tracing as _;

use std::time::{Duration, Instant};

const INPUT_BITS: usize = 1 << 16;
const WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct HarnessResult {
    name: &'static str,
    conversions: u64,
    bits_per_second: f64,
}

fn input_pattern(bits: usize) -> String {
    (0..bits)
        .map(|index| if index % 3 == 0 { '1' } else { '0' })
        .collect()
}

fn run_window(name: &'static str, bits: &str, convert: impl Fn(&str) -> String) -> HarnessResult {
    let mut conversions = 0u64;
    let start = Instant::now();

    while start.elapsed() < WINDOW {
        let hex = convert(bits);
        assert!(!hex.is_empty());
        conversions += 1;
    }

    let elapsed = start.elapsed().as_secs_f64();
    HarnessResult {
        name,
        conversions,
        bits_per_second: (conversions as f64 * bits.len() as f64) / elapsed,
    }
}

fn main() {
    let bits = input_pattern(INPUT_BITS);
    let simulator = ProcessorSimulator::with_config(EngineConfig::default());

    for mode in [ConversionMode::Standard, ConversionMode::Unsigned] {
        let sequential = ProcessorSimulator::binary_to_hex(&bits, mode).expect("valid input");
        let chunked = simulator
            .multi_threaded_binary_to_hex(&bits, mode)
            .expect("valid input");
        assert_eq!(sequential, chunked, "{mode} chunked output diverged");
    }

    let results = [
        run_window("sequential", &bits, |input| {
            ProcessorSimulator::binary_to_hex(input, ConversionMode::Standard).expect("valid input")
        }),
        run_window("chunked", &bits, |input| {
            simulator
                .multi_threaded_binary_to_hex(input, ConversionMode::Standard)
                .expect("valid input")
        }),
    ];

    println!(
        "input: {INPUT_BITS} bits, workers: {}, window: {WINDOW:?}",
        simulator.worker_count()
    );
    for result in results {
        println!(
            "{:<12} {:>8} conversions {:>14.0} bits/s",
            result.name, result.conversions, result.bits_per_second
        );
    }
}
