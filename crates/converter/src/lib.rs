//! Front-end glue for the binhex conversion engine.

#[cfg(test)]
use tempfile as _;
use tracing_subscriber as _;

/// Mode-walkthrough output used by the `demo` command.
pub mod demo;
/// Request handling and JSON response payloads.
pub mod request;

pub use request::{
    handle_conversion_request, resolve_mode, ConversionResponse, ConversionStrategy,
};
