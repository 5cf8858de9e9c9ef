//! In-process record store backend.
//!
//! Implements the driver traits over a shared in-memory store. Useful
//! for tests and demos, and as a reference for what a real driver must
//! provide: layout schemas, coded failures in the store's native
//! numbering, and server-side parsing of escaped query values.

mod find;
mod record;
mod store;

pub use record::MemoryRecord;
pub use store::{MemoryConnection, MemoryStore, ScriptRun};
