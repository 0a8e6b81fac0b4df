//! Register bookkeeping owned by an engine instance.

/// Named register store with reset semantics.
pub mod registers;

pub use registers::RegisterStore;
