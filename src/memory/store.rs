use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::find::{build_matchers, record_matches};
use super::record::MemoryRecord;
use crate::config::StoreOptions;
use crate::driver::{DriverResult, LayoutConnection};
use crate::error::DriverError;
use crate::escape::unescape_str;

// Error codes in the remote store's native numbering.
pub(super) const ERR_RECORD_MISSING: i32 = 101;
pub(super) const ERR_FIELD_MISSING: i32 = 102;
pub(super) const ERR_SCRIPT_MISSING: i32 = 104;
pub(super) const ERR_LAYOUT_MISSING: i32 = 105;
pub(super) const ERR_BAD_CREDENTIALS: i32 = 212;
pub(super) const ERR_CRITERIA_INVALID: i32 = 406;
pub(super) const ERR_OPEN_FAILED: i32 = 802;

pub(super) fn layout_missing(layout: &str) -> DriverError {
    DriverError::new(ERR_LAYOUT_MISSING, format!("layout {layout} is missing"))
}

pub(super) fn record_missing(record_id: u64) -> DriverError {
    DriverError::new(ERR_RECORD_MISSING, format!("record {record_id} is missing"))
}

pub(super) fn field_missing(field: &str) -> DriverError {
    DriverError::new(ERR_FIELD_MISSING, format!("field {field} is missing"))
}

#[derive(Debug)]
pub(super) struct LayoutData {
    pub(super) field_names: Vec<String>,
    pub(super) scripts: Vec<String>,
    pub(super) records: BTreeMap<u64, Vec<String>>,
    pub(super) next_id: u64,
}

impl Default for LayoutData {
    fn default() -> Self {
        Self {
            field_names: Vec::new(),
            scripts: Vec::new(),
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// One script execution observed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub layout: String,
    pub script: String,
    pub params: Vec<String>,
}

#[derive(Debug, Default)]
pub(super) struct StoreInner {
    pub(super) layouts: BTreeMap<String, LayoutData>,
    pub(super) ops: usize,
    pub(super) script_log: Vec<ScriptRun>,
}

/// Shared in-process record store.
///
/// Cloning shares the underlying data; connections opened from any
/// clone see the same layouts and records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
    credentials: Option<(String, String)>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `user`/`password` at connect time.
    #[must_use]
    pub fn with_credentials(mut self, user: &str, password: &str) -> Self {
        self.credentials = Some((user.to_string(), password.to_string()));
        self
    }

    /// Define a layout and its field schema. Replaces any existing
    /// definition, records included.
    pub async fn define_layout(&self, name: &str, field_names: &[&str]) {
        let mut inner = self.inner.lock().await;
        inner.layouts.insert(
            name.to_string(),
            LayoutData {
                field_names: field_names.iter().map(|f| (*f).to_string()).collect(),
                ..LayoutData::default()
            },
        );
    }

    /// Register a script name on a layout, creating the layout entry
    /// when it does not exist yet.
    pub async fn register_script(&self, layout: &str, script: &str) {
        let mut inner = self.inner.lock().await;
        inner
            .layouts
            .entry(layout.to_string())
            .or_default()
            .scripts
            .push(script.to_string());
    }

    /// Number of driver operations the store has served.
    pub async fn op_count(&self) -> usize {
        self.inner.lock().await.ops
    }

    /// Script executions observed so far, oldest first.
    pub async fn script_runs(&self) -> Vec<ScriptRun> {
        self.inner.lock().await.script_log.clone()
    }

    /// Open a connection, checking credentials when the store has
    /// them configured.
    ///
    /// # Errors
    ///
    /// Returns code 802 when host or database is empty and code 212
    /// on a credential mismatch.
    #[allow(clippy::unused_async)]
    pub async fn connect(&self, options: &StoreOptions) -> DriverResult<MemoryConnection> {
        if options.host.is_empty() || options.database.is_empty() {
            return Err(DriverError::new(ERR_OPEN_FAILED, "unable to open database"));
        }
        if let Some((user, password)) = &self.credentials {
            if user != &options.user || password != &options.password {
                return Err(DriverError::new(
                    ERR_BAD_CREDENTIALS,
                    "invalid account or password",
                ));
            }
        }
        Ok(MemoryConnection {
            inner: Arc::clone(&self.inner),
        })
    }
}

/// Connection handle onto a [`MemoryStore`].
#[derive(Debug)]
pub struct MemoryConnection {
    pub(super) inner: Arc<Mutex<StoreInner>>,
}

#[async_trait]
impl LayoutConnection for MemoryConnection {
    type Record = MemoryRecord;

    async fn find(
        &mut self,
        layout: &str,
        criteria: &[(String, String)],
    ) -> DriverResult<Vec<MemoryRecord>> {
        let store = Arc::clone(&self.inner);
        let mut inner = self.inner.lock().await;
        inner.ops += 1;

        // The store parses escape sequences on its side of the wire.
        let layout = unescape_str(layout).into_owned();
        let criteria: Vec<(String, String)> = criteria
            .iter()
            .map(|(field, value)| {
                (
                    unescape_str(field).into_owned(),
                    unescape_str(value).into_owned(),
                )
            })
            .collect();

        let data = inner
            .layouts
            .get(&layout)
            .ok_or_else(|| layout_missing(&layout))?;
        let matchers = build_matchers(data, &criteria)?;
        let field_names = Arc::new(data.field_names.clone());

        let mut found = Vec::new();
        for (&id, values) in &data.records {
            if record_matches(&matchers, values) {
                found.push(MemoryRecord::new(
                    Arc::clone(&store),
                    layout.clone(),
                    id,
                    Arc::clone(&field_names),
                    values.clone(),
                ));
            }
        }
        Ok(found)
    }

    async fn find_by_id(&mut self, layout: &str, record_id: u64) -> DriverResult<MemoryRecord> {
        let store = Arc::clone(&self.inner);
        let mut inner = self.inner.lock().await;
        inner.ops += 1;

        let layout = unescape_str(layout).into_owned();
        let data = inner
            .layouts
            .get(&layout)
            .ok_or_else(|| layout_missing(&layout))?;
        let values = data
            .records
            .get(&record_id)
            .ok_or_else(|| record_missing(record_id))?;

        Ok(MemoryRecord::new(
            store,
            layout.clone(),
            record_id,
            Arc::new(data.field_names.clone()),
            values.clone(),
        ))
    }

    async fn create(
        &mut self,
        layout: &str,
        fields: &[(String, String)],
    ) -> DriverResult<MemoryRecord> {
        let store = Arc::clone(&self.inner);
        let mut inner = self.inner.lock().await;
        inner.ops += 1;

        let layout = unescape_str(layout).into_owned();
        let data = inner
            .layouts
            .get_mut(&layout)
            .ok_or_else(|| layout_missing(&layout))?;

        let mut values = vec![String::new(); data.field_names.len()];
        for (name, value) in fields {
            let name = unescape_str(name).into_owned();
            let value = unescape_str(value).into_owned();
            let idx = data
                .field_names
                .iter()
                .position(|field| *field == name)
                .ok_or_else(|| field_missing(&name))?;
            values[idx] = value;
        }

        let record_id = data.next_id;
        data.next_id += 1;
        data.records.insert(record_id, values.clone());

        Ok(MemoryRecord::new(
            store,
            layout,
            record_id,
            Arc::new(data.field_names.clone()),
            values,
        ))
    }

    async fn layout_names(&mut self) -> DriverResult<Vec<String>> {
        let mut inner = self.inner.lock().await;
        inner.ops += 1;
        Ok(inner.layouts.keys().cloned().collect())
    }

    async fn perform_script(
        &mut self,
        layout: &str,
        script: &str,
        params: &[String],
    ) -> DriverResult<()> {
        let mut inner = self.inner.lock().await;
        inner.ops += 1;

        let layout = unescape_str(layout).into_owned();
        {
            let data = inner
                .layouts
                .get(&layout)
                .ok_or_else(|| layout_missing(&layout))?;
            if !data.scripts.iter().any(|name| name == script) {
                return Err(DriverError::new(
                    ERR_SCRIPT_MISSING,
                    format!("script {script} is missing"),
                ));
            }
        }

        inner.script_log.push(ScriptRun {
            layout,
            script: script.to_string(),
            params: params.to_vec(),
        });
        Ok(())
    }
}
