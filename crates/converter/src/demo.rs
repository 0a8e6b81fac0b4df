//! Walkthrough of every conversion mode and the register store lifecycle.

use std::io::{self, Write};

use binhex_core::{ConversionMode, ProcessorSimulator};

/// Sample inputs shown by [`write_conversion_demo`], one per mode.
pub const DEMO_INPUTS: [(&str, &str, ConversionMode); 4] = [
    ("Standard Mode", "1010", ConversionMode::Standard),
    ("Signed Mode (Negative)", "11110000", ConversionMode::Signed),
    ("Unsigned Mode", "11111111", ConversionMode::Unsigned),
    (
        "Floating Point Mode",
        "01000001001000000000000000000000",
        ConversionMode::FloatingPoint,
    ),
];

/// Writes the conversion of each sample input under its mode.
///
/// # Errors
///
/// Returns any error raised by `out`. Conversion failures are written as
/// text.
pub fn write_conversion_demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Conversion Mode Demonstrations:")?;
    for (index, (title, binary, mode)) in DEMO_INPUTS.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{title}:")?;
        let hex = ProcessorSimulator::binary_to_hex(binary, *mode)
            .unwrap_or_else(|error| format!("<{error}>"));
        writeln!(out, "Binary: {binary} -> Hex: {hex}")?;
    }
    Ok(())
}

/// Writes a set/get/reset walkthrough of the register store.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_state_demo(out: &mut impl Write) -> io::Result<()> {
    let mut simulator = ProcessorSimulator::new();
    let state = simulator.state_mut();

    writeln!(out)?;
    writeln!(out, "Processor State Demonstration:")?;

    state.set("R1", 42);
    state.set("R2", 100);
    for name in ["R1", "R2"] {
        match state.get(name) {
            Ok(value) => writeln!(out, "{name} Value: {value}")?,
            Err(error) => writeln!(out, "{error}")?,
        }
    }

    state.reset();
    writeln!(out, "State reset. Attempting to access R1...")?;
    match state.get("R1") {
        Ok(value) => writeln!(out, "R1 Value: {value}")?,
        Err(error) => writeln!(out, "Exception caught: {error}")?,
    }
    Ok(())
}
