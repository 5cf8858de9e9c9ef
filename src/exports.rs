//! Backend-specific type exports.
//!
//! This module contains the conditional feature exports for bundled
//! backends, keeping them organized in one place.

#[cfg(feature = "memory")]
pub use crate::memory::{MemoryConnection, MemoryRecord, MemoryStore, ScriptRun};
