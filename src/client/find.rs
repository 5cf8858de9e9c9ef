use crate::client::RecordStoreClient;
use crate::driver::LayoutConnection;
use crate::error::LayoutDbError;
use crate::escape::escape_str;
use crate::results::FoundSet;

impl<C: LayoutConnection> RecordStoreClient<C> {
    /// Find records on `layout` matching all equality criteria.
    ///
    /// Criterion field names and values are escaped for the remote
    /// query language before the request is issued; the layout name is
    /// passed through as given, and the remote reports unknown layouts
    /// itself. On success the layout is recorded as the session's last
    /// layout and the result is returned as an explicit [`FoundSet`]
    /// handle for later [`set_fields`](RecordStoreClient::set_fields)
    /// calls.
    ///
    /// # Errors
    ///
    /// Propagates the remote error code on failure.
    pub async fn select(
        &mut self,
        layout: &str,
        criteria: &[(&str, &str)],
    ) -> Result<FoundSet<C::Record>, LayoutDbError> {
        let escaped: Vec<(String, String)> = criteria
            .iter()
            .map(|(field, value)| {
                (
                    escape_str(field).into_owned(),
                    escape_str(value).into_owned(),
                )
            })
            .collect();

        let records = self.conn_mut().find(layout, &escaped).await?;
        tracing::debug!(layout, records = records.len(), "find completed");

        self.set_last_layout(layout);
        Ok(FoundSet::new(layout.to_string(), records))
    }

    /// Alias of [`select`](RecordStoreClient::select).
    ///
    /// # Errors
    ///
    /// Propagates the remote error code on failure.
    pub async fn find(
        &mut self,
        layout: &str,
        criteria: &[(&str, &str)],
    ) -> Result<FoundSet<C::Record>, LayoutDbError> {
        self.select(layout, criteria).await
    }
}
