use crate::client::RecordStoreClient;
use crate::driver::{LayoutConnection, LayoutRecord};
use crate::error::LayoutDbError;
use crate::escape::escape_str;
use crate::results::FoundSet;

fn escape_pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(field, value)| {
            (
                escape_str(field).into_owned(),
                escape_str(value).into_owned(),
            )
        })
        .collect()
}

impl<C: LayoutConnection> RecordStoreClient<C> {
    /// Insert one record into `layout`.
    ///
    /// The layout name and every field name and value are escaped
    /// before the create command is issued. The created record handle
    /// is dropped once the remote reports success.
    ///
    /// # Errors
    ///
    /// Returns `LayoutDbError::ParameterError` when `layout` is empty,
    /// without contacting the remote system; otherwise propagates the
    /// remote error code.
    pub async fn insert(
        &mut self,
        layout: &str,
        fields: &[(&str, &str)],
    ) -> Result<(), LayoutDbError> {
        if layout.is_empty() {
            return Err(LayoutDbError::ParameterError(
                "layout name must not be empty".into(),
            ));
        }

        let escaped = escape_pairs(fields);
        let escaped_layout = escape_str(layout);
        let record = self.conn_mut().create(&escaped_layout, &escaped).await?;
        tracing::debug!(layout, record_id = record.record_id(), "record created");
        Ok(())
    }

    /// Apply `fields` to every record of `found`, then commit.
    ///
    /// Assignments are staged on each record in order, but only the
    /// last record's staged values are committed; earlier records keep
    /// their assignments in memory only, and success or failure is
    /// judged on that single commit.
    ///
    /// # Errors
    ///
    /// Returns `LayoutDbError::ParameterError` when the found set is
    /// empty, without contacting the remote system; otherwise
    /// propagates the remote error code of the commit.
    pub async fn set_fields(
        &mut self,
        found: &mut FoundSet<C::Record>,
        fields: &[(&str, &str)],
    ) -> Result<(), LayoutDbError> {
        if found.is_empty() {
            return Err(LayoutDbError::ParameterError(
                "found set has no records".into(),
            ));
        }

        let escaped = escape_pairs(fields);
        for record in found.raw_mut().iter_mut() {
            for (name, value) in &escaped {
                record.set_field(name, value.clone());
            }
        }

        if let Some(last) = found.raw_mut().last_mut() {
            last.commit().await?;
        }
        tracing::debug!(
            layout = found.layout(),
            staged = found.len(),
            "field assignments committed"
        );
        Ok(())
    }

    /// Update one record on `layout` by its remote-assigned id.
    ///
    /// Fetches the record, stages the escaped assignments, and
    /// commits.
    ///
    /// # Errors
    ///
    /// Returns `LayoutDbError::ParameterError` when `layout` is empty
    /// or `record_id` is zero, without contacting the remote system;
    /// otherwise propagates the remote error code of the fetch or the
    /// commit.
    pub async fn update_record_by_id(
        &mut self,
        layout: &str,
        fields: &[(&str, &str)],
        record_id: u64,
    ) -> Result<(), LayoutDbError> {
        if layout.is_empty() {
            return Err(LayoutDbError::ParameterError(
                "layout name must not be empty".into(),
            ));
        }
        if record_id == 0 {
            return Err(LayoutDbError::ParameterError(
                "record id must be positive".into(),
            ));
        }

        let mut record = self.conn_mut().find_by_id(layout, record_id).await?;
        for (name, value) in escape_pairs(fields) {
            record.set_field(&name, value);
        }
        record.commit().await?;
        tracing::debug!(layout, record_id, "record updated");
        Ok(())
    }
}
