use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{StoreInner, field_missing, layout_missing, record_missing};
use crate::driver::{DriverResult, LayoutRecord};
use crate::escape::unescape_str;

/// Record handle backed by the shared in-process store.
#[derive(Debug)]
pub struct MemoryRecord {
    store: Arc<Mutex<StoreInner>>,
    layout: String,
    record_id: u64,
    field_names: Arc<Vec<String>>,
    values: Vec<String>,
    staged: BTreeMap<String, String>,
}

impl MemoryRecord {
    pub(super) fn new(
        store: Arc<Mutex<StoreInner>>,
        layout: String,
        record_id: u64,
        field_names: Arc<Vec<String>>,
        values: Vec<String>,
    ) -> Self {
        Self {
            store,
            layout,
            record_id,
            field_names,
            values,
            staged: BTreeMap::new(),
        }
    }
}

#[async_trait]
impl LayoutRecord for MemoryRecord {
    fn record_id(&self) -> u64 {
        self.record_id
    }

    fn field_names(&self) -> &[String] {
        &self.field_names
    }

    fn field(&self, name: &str) -> Option<&str> {
        let idx = self.field_names.iter().position(|field| field == name)?;
        self.values.get(idx).map(String::as_str)
    }

    fn set_field(&mut self, name: &str, value: String) {
        self.staged.insert(name.to_string(), value);
    }

    async fn commit(&mut self) -> DriverResult<()> {
        let staged = std::mem::take(&mut self.staged);

        let mut inner = self.store.lock().await;
        inner.ops += 1;
        let data = inner
            .layouts
            .get_mut(&self.layout)
            .ok_or_else(|| layout_missing(&self.layout))?;
        let values = data
            .records
            .get_mut(&self.record_id)
            .ok_or_else(|| record_missing(self.record_id))?;

        // Staged names and values arrive escaped; the store parses the
        // escapes the way the remote server does. Validate everything
        // before writing anything.
        let mut updates = Vec::with_capacity(staged.len());
        for (name, value) in staged {
            let name = unescape_str(&name).into_owned();
            let value = unescape_str(&value).into_owned();
            let idx = self
                .field_names
                .iter()
                .position(|field| *field == name)
                .ok_or_else(|| field_missing(&name))?;
            updates.push((idx, value));
        }

        for (idx, value) in updates {
            values[idx] = value.clone();
            self.values[idx] = value;
        }
        Ok(())
    }
}
