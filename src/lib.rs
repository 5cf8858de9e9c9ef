//! Async CRUD middleware for layout-oriented record databases.
//!
//! The crate puts a typed, validated surface in front of a remote
//! record store's native driver: equality finds, inserts, field
//! updates, script execution, and layout discovery, with the store's
//! error codes passed through unchanged. Querying, transactions, and
//! connection handling stay with the driver behind the traits in
//! [`driver`]; this layer validates arguments, escapes values for the
//! remote query language, and reshapes driver cursors into
//! field-name→value records.
//!
//! ```rust
//! use layoutdb_middleware::prelude::*;
//!
//! # async fn demo() -> Result<(), LayoutDbError> {
//! let store = MemoryStore::new();
//! store.define_layout("Contacts", &["name", "email"]).await;
//!
//! let options = StoreOptions::new("db.example.net", "crm", "webuser", "secret");
//! let mut client = RecordStoreClient::new(store.connect(&options).await?);
//!
//! client
//!     .insert("Contacts", &[("name", "Joe"), ("email", "joe@example.net")])
//!     .await?;
//! let found = client.select("Contacts", &[("name", "Joe")]).await?;
//! assert_eq!(found.len(), 1);
//! # Ok(()) }
//! ```

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod escape;
pub mod exports;
#[cfg(feature = "memory")]
pub mod memory;
pub mod prelude;
pub mod results;

pub use client::RecordStoreClient;
pub use config::{StoreOptions, StoreOptionsBuilder};
pub use error::{DriverError, LayoutDbError, error_code};
pub use results::{FoundSet, Record};
