//! The vendor seam: traits describing the remote store's native client
//! surface.
//!
//! Everything interesting — query execution, transactions, the wire
//! protocol — lives behind these traits and is supplied by a driver.
//! The client in [`crate::client`] only validates, escapes, and
//! reshapes what crosses this boundary. Implementations receive field
//! names and values already escaped for the remote query language and
//! are expected to parse the escapes on their side, the way the remote
//! server itself does.

use async_trait::async_trait;

use crate::error::DriverError;

/// Outcome of a driver call.
pub type DriverResult<T> = Result<T, DriverError>;

/// One record held open by a driver.
///
/// Field assignments are staged locally on the handle; nothing reaches
/// the remote store until [`commit`](LayoutRecord::commit).
#[async_trait]
pub trait LayoutRecord: Send {
    /// Remote-assigned record identifier.
    fn record_id(&self) -> u64;

    /// Field names of the record's layout, in layout order.
    fn field_names(&self) -> &[String];

    /// Current value of a field, or `None` when the layout has no such
    /// field.
    fn field(&self, name: &str) -> Option<&str>;

    /// Stage a new value for a field.
    fn set_field(&mut self, name: &str, value: String);

    /// Persist staged assignments back to the store.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code when the record, layout,
    /// or a staged field no longer exists remotely.
    async fn commit(&mut self) -> DriverResult<()>;
}

/// Native client surface of the remote record store.
///
/// One value of an implementing type is one open connection; the
/// client owns it exclusively and never pools or reopens it.
#[async_trait]
pub trait LayoutConnection: Send {
    type Record: LayoutRecord;

    /// Find records on `layout` matching all equality criteria.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code, e.g. for an unknown
    /// layout or criterion field.
    async fn find(
        &mut self,
        layout: &str,
        criteria: &[(String, String)],
    ) -> DriverResult<Vec<Self::Record>>;

    /// Fetch one record by its remote-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code when the layout or record
    /// is missing.
    async fn find_by_id(&mut self, layout: &str, record_id: u64) -> DriverResult<Self::Record>;

    /// Create one record on `layout` from escaped field assignments.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code when the layout or a
    /// field is unknown.
    async fn create(
        &mut self,
        layout: &str,
        fields: &[(String, String)],
    ) -> DriverResult<Self::Record>;

    /// Names of the layouts visible to this connection.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code on failure.
    async fn layout_names(&mut self) -> DriverResult<Vec<String>>;

    /// Perform a named script in the context of `layout`.
    ///
    /// # Errors
    ///
    /// Returns the store's native error code when the layout or script
    /// is unknown, or the script itself fails.
    async fn perform_script(
        &mut self,
        layout: &str,
        script: &str,
        params: &[String],
    ) -> DriverResult<()>;
}
