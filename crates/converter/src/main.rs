//! CLI entry point for the binhex converter binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use binhex_core::{ConversionMode, EngineConfig, ProcessorSimulator};
use converter::demo::{write_conversion_demo, write_state_demo};
use converter::{handle_conversion_request, ConversionResponse, ConversionStrategy};
use serde as _;
use serde_json as _;
#[cfg(test)]
use tempfile as _;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable supplying a default worker count.
const WORKERS_ENV: &str = "BINHEX_WORKERS";

const USAGE_TEXT: &str = "\
Usage: binhex <command> [options]

Commands:
  convert <binary> [options]   Convert a binary string to hexadecimal
  demo [binary]                Demonstrate every mode and the register store

Options:
  -m, --mode <name>     STANDARD, SIGNED, UNSIGNED or FLOATING_POINT
                        (unrecognized names use STANDARD)
  -p, --parallel        Decode chunks concurrently
  -w, --workers <n>     Chunk count for --parallel (default: BINHEX_WORKERS
                        or available parallelism)
  -f, --file <path>     Read the binary string from a file
      --json            Print {\"hex\": ...} or {\"error\": ...}
      --verbose         Log engine activity to stderr
  -h, --help            Show this help message

Examples:
  binhex convert 11110000 --mode SIGNED
  binhex convert -f input.txt --parallel --workers 8
  binhex demo 1010
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Convert(ConvertArgs),
    Demo(DemoArgs),
}

#[derive(Debug, PartialEq, Eq)]
enum BinarySource {
    Literal(String),
    File(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
struct ConvertArgs {
    source: BinarySource,
    mode: String,
    parallel: bool,
    workers: Option<usize>,
    json: bool,
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct DemoArgs {
    binary: Option<String>,
    verbose: bool,
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    match command_str.as_str() {
        "convert" => parse_convert_args(args)
            .map(Command::Convert)
            .map(ParseResult::Command),
        "demo" => parse_demo_args(args)
            .map(Command::Demo)
            .map(ParseResult::Command),
        other => Err(format!("unknown command: {other}")),
    }
}

fn parse_worker_count(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("invalid worker count: {value}"))
}

#[allow(clippy::while_let_on_iterator)]
fn parse_convert_args(mut args: impl Iterator<Item = OsString>) -> Result<ConvertArgs, String> {
    let mut binary: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut mode = "STANDARD".to_string();
    let mut parallel = false;
    let mut workers: Option<usize> = None;
    let mut json = false;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--parallel" || arg == "-p" {
            parallel = true;
            continue;
        }

        if arg == "--json" {
            json = true;
            continue;
        }

        if arg == "--verbose" {
            verbose = true;
            continue;
        }

        if arg == "-m" || arg == "--mode" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --mode".to_string())?;
            mode = value.to_string_lossy().to_string();
            continue;
        }

        if arg == "-w" || arg == "--workers" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --workers".to_string())?;
            workers = Some(parse_worker_count(&value.to_string_lossy())?);
            continue;
        }

        if arg == "-f" || arg == "--file" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --file".to_string())?;
            file = Some(PathBuf::from(value));
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if binary.is_some() {
            return Err("multiple binary inputs provided".to_string());
        }
        binary = Some(arg.to_string_lossy().to_string());
    }

    let source = match (binary, file) {
        (Some(_), Some(_)) => return Err("binary input and --file are exclusive".to_string()),
        (Some(binary), None) => BinarySource::Literal(binary),
        (None, Some(path)) => BinarySource::File(path),
        (None, None) => return Err("missing binary input".to_string()),
    };

    Ok(ConvertArgs {
        source,
        mode,
        parallel,
        workers,
        json,
        verbose,
    })
}

fn parse_demo_args(args: impl Iterator<Item = OsString>) -> Result<DemoArgs, String> {
    let mut binary: Option<String> = None;
    let mut verbose = false;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--verbose" {
            verbose = true;
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if binary.is_some() {
            return Err("multiple binary inputs provided".to_string());
        }
        binary = Some(arg.to_string_lossy().to_string());
    }

    Ok(DemoArgs { binary, verbose })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn engine_config(workers: Option<usize>) -> Result<EngineConfig, String> {
    let worker_count = match workers {
        Some(count) => Some(count),
        None => match env::var(WORKERS_ENV) {
            Ok(value) => Some(parse_worker_count(value.trim())?),
            Err(_) => None,
        },
    };
    Ok(EngineConfig { worker_count })
}

fn read_binary(source: &BinarySource) -> Result<String, String> {
    match source {
        BinarySource::Literal(binary) => Ok(binary.clone()),
        BinarySource::File(path) => fs::read_to_string(path)
            .map(|contents| contents.trim().to_string())
            .map_err(|e| format!("failed to read {}: {e}", path.display())),
    }
}

fn report(response: &ConversionResponse, json: bool) -> Result<(), i32> {
    if json {
        match response.to_json() {
            Ok(payload) => println!("{payload}"),
            Err(e) => {
                eprintln!("error: failed to encode response: {e}");
                return Err(1);
            }
        }
        return if response.is_ok() { Ok(()) } else { Err(1) };
    }

    match response {
        ConversionResponse::Hex { hex } => {
            println!("{hex}");
            Ok(())
        }
        ConversionResponse::Error { error } => {
            eprintln!("error: {error}");
            Err(1)
        }
    }
}

fn run_convert(args: &ConvertArgs) -> Result<(), i32> {
    let config = engine_config(args.workers).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    let binary = read_binary(&args.source).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let simulator = ProcessorSimulator::with_config(config);
    let strategy = if args.parallel {
        debug!(
            workers = simulator.worker_count(),
            "parallel conversion requested"
        );
        ConversionStrategy::Parallel
    } else {
        ConversionStrategy::Sequential
    };

    let response = handle_conversion_request(&simulator, &binary, &args.mode, strategy);
    report(&response, args.json)
}

fn run_demo(args: &DemoArgs) -> Result<(), i32> {
    let written = {
        let mut stdout = io::stdout().lock();
        write_conversion_demo(&mut stdout).and_then(|()| write_state_demo(&mut stdout))
    };
    if let Err(e) = written {
        eprintln!("error: failed to write demo output: {e}");
        return Err(1);
    }

    if let Some(binary) = &args.binary {
        println!();
        println!("Command-line Input Processing:");
        match ProcessorSimulator::binary_to_hex(binary, ConversionMode::Standard) {
            Ok(hex) => println!("Binary: {binary} -> Hex: {hex}"),
            Err(e) => {
                eprintln!("error: {e}");
                return Err(1);
            }
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(Command::Convert(args))) => {
            init_logging(args.verbose);
            match run_convert(&args) {
                Ok(()) => 0,
                Err(code) => code,
            }
        }
        Ok(ParseResult::Command(Command::Demo(args))) => {
            init_logging(args.verbose);
            match run_demo(&args) {
                Ok(()) => 0,
                Err(code) => code,
            }
        }
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
            }
            1
        }
    };

    std::process::exit(exit_code);
}
