//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::client::RecordStoreClient;
pub use crate::config::{StoreOptions, StoreOptionsBuilder};
pub use crate::driver::{DriverResult, LayoutConnection, LayoutRecord};
pub use crate::error::{DriverError, LayoutDbError, error_code};
pub use crate::escape::{escape_all, escape_str, unescape_str};
pub use crate::results::{FoundSet, Record};

#[cfg(feature = "memory")]
pub use crate::exports::{MemoryConnection, MemoryRecord, MemoryStore, ScriptRun};
