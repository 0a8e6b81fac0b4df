use std::collections::HashMap;

use tracing::debug;

use crate::{ConversionError, Result};

/// Named 64-bit register values attached to one engine instance.
///
/// Registers come into existence on their first [`RegisterStore::set`]. A name
/// that was never set, or was cleared by [`RegisterStore::reset`], is always
/// reported as missing and never reads back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegisterStore {
    registers: HashMap<String, u64>,
}

impl RegisterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a register, creating it when absent.
    pub fn set(&mut self, name: impl Into<String>, value: u64) {
        self.registers.insert(name.into(), value);
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::RegisterNotFound`] when `name` holds no
    /// value.
    pub fn get(&self, name: &str) -> Result<u64> {
        self.registers
            .get(name)
            .copied()
            .ok_or_else(|| ConversionError::RegisterNotFound {
                name: name.to_string(),
            })
    }

    /// Returns `true` when `name` currently holds a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.registers.contains_key(name)
    }

    /// Removes every register.
    pub fn reset(&mut self) {
        debug!(cleared = self.registers.len(), "resetting register store");
        self.registers.clear();
    }

    /// Number of registers currently holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns `true` when no register holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Returns all registers ordered by name.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .registers
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        entries.sort_unstable_by(|left, right| left.0.cmp(right.0));
        entries
    }
}
