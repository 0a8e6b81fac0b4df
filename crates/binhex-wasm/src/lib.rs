use binhex_core::{EngineConfig, ProcessorSimulator};
use converter::{handle_conversion_request, ConversionResponse, ConversionStrategy};
use serde::Serialize;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

/// JS-facing register listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterEntry {
    pub name: String,
    pub value: u64,
}

#[wasm_bindgen]
pub struct WasmSimulator {
    simulator: ProcessorSimulator,
}

impl Default for WasmSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSimulator {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            simulator: ProcessorSimulator::new(),
        }
    }

    /// Creates a simulator whose chunked conversion uses `workers` chunks.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        console_error_panic_hook::set_once();
        Self {
            simulator: ProcessorSimulator::with_config(EngineConfig::with_worker_count(workers)),
        }
    }

    /// Converts on the calling thread.
    /// Returns `{hex}` or `{error}` as a JS object.
    pub fn convert(&self, binary: &str, mode: &str) -> Result<JsValue, JsValue> {
        let response = self.respond(binary, mode, ConversionStrategy::Sequential);
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }

    /// Converts through the chunked path.
    pub fn convert_parallel(&self, binary: &str, mode: &str) -> Result<JsValue, JsValue> {
        let response = self.respond(binary, mode, ConversionStrategy::Parallel);
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }

    #[must_use]
    pub fn validate(binary: &str) -> bool {
        ProcessorSimulator::validate_binary_input(binary)
    }

    pub fn execute_instruction(&self, instruction: &str) -> Result<(), JsError> {
        self.simulator
            .execute_instruction(instruction)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn set_register(&mut self, name: &str, value: u64) {
        self.simulator.set_register(name, value);
    }

    pub fn get_register(&self, name: &str) -> Result<u64, JsError> {
        self.simulator
            .get_register(name)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Clears every register.
    pub fn reset(&mut self) {
        self.simulator.reset();
        console_log!("register store reset");
    }

    /// Returns the register store as an array of `{name, value}` objects.
    pub fn registers(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.register_entries())?)
    }
}

impl WasmSimulator {
    fn respond(
        &self,
        binary: &str,
        mode: &str,
        strategy: ConversionStrategy,
    ) -> ConversionResponse {
        handle_conversion_request(&self.simulator, binary, mode, strategy)
    }

    fn register_entries(&self) -> Vec<RegisterEntry> {
        self.simulator
            .state()
            .entries()
            .into_iter()
            .map(|(name, value)| RegisterEntry {
                name: name.to_string(),
                value,
            })
            .collect()
    }
}
