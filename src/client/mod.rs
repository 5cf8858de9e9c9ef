//! The record store client.

mod find;
mod mutate;

use crate::driver::LayoutConnection;
use crate::error::LayoutDbError;

/// Client over one remote record-store connection.
///
/// Owns the connection exclusively. Every operation issues one remote
/// call and waits for its response; the instance is not meant to be
/// shared across tasks, and the `&mut self` receivers enforce that one
/// call is in flight at a time.
pub struct RecordStoreClient<C> {
    conn: C,
    last_layout: Option<String>,
}

impl<C> RecordStoreClient<C> {
    #[must_use]
    pub fn new(conn: C) -> Self {
        Self {
            conn,
            last_layout: None,
        }
    }

    /// Layout of the most recent successful select, if any.
    #[must_use]
    pub fn last_layout(&self) -> Option<&str> {
        self.last_layout.as_deref()
    }

    /// Consume the client and return the underlying connection.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut C {
        &mut self.conn
    }

    pub(crate) fn set_last_layout(&mut self, layout: &str) {
        self.last_layout = Some(layout.to_string());
    }
}

impl<C: LayoutConnection> RecordStoreClient<C> {
    /// Names of the layouts visible to this connection.
    ///
    /// # Errors
    ///
    /// Propagates the remote error code on failure.
    pub async fn list_layouts(&mut self) -> Result<Vec<String>, LayoutDbError> {
        let layouts = self.conn.layout_names().await?;
        tracing::debug!(count = layouts.len(), "listed layouts");
        Ok(layouts)
    }

    /// Perform a named remote script in the context of `layout`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutDbError::ParameterError` when `layout` or
    /// `script` is empty, without contacting the remote system;
    /// otherwise propagates the remote error code.
    pub async fn run_script(
        &mut self,
        layout: &str,
        script: &str,
        params: &[&str],
    ) -> Result<(), LayoutDbError> {
        if layout.is_empty() {
            return Err(LayoutDbError::ParameterError(
                "layout name must not be empty".into(),
            ));
        }
        if script.is_empty() {
            return Err(LayoutDbError::ParameterError(
                "script name must not be empty".into(),
            ));
        }

        let params: Vec<String> = params.iter().map(|p| (*p).to_string()).collect();
        self.conn.perform_script(layout, script, &params).await?;
        tracing::debug!(layout, script, "performed script");
        Ok(())
    }

    /// Delete a record from a layout.
    ///
    /// Not wired to a remote operation; always fails with
    /// [`LayoutDbError::Unimplemented`].
    ///
    /// # Errors
    ///
    /// Always returns `LayoutDbError::Unimplemented`.
    #[allow(clippy::unused_async)]
    pub async fn delete(&mut self, _layout: &str, _record_id: u64) -> Result<(), LayoutDbError> {
        Err(LayoutDbError::Unimplemented(
            "delete is not implemented".into(),
        ))
    }

    /// Id of the last inserted or updated record.
    ///
    /// Not wired to a remote operation; always fails with
    /// [`LayoutDbError::Unimplemented`].
    ///
    /// # Errors
    ///
    /// Always returns `LayoutDbError::Unimplemented`.
    #[allow(clippy::unused_async)]
    pub async fn last_insert_id(&mut self) -> Result<u64, LayoutDbError> {
        Err(LayoutDbError::Unimplemented(
            "last_insert_id is not implemented".into(),
        ))
    }
}
