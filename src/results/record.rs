use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// One record of a found set.
///
/// A plain snapshot of the record as the select returned it: field
/// names shared across the whole found set, values in layout order,
/// and the remote-assigned record id injected alongside the fields.
#[derive(Debug, Clone)]
pub struct Record {
    record_id: u64,
    field_names: Arc<Vec<String>>,
    values: Vec<String>,
    // Cache for name lookups, shared by every record of the found set.
    field_index_cache: Arc<HashMap<String, usize>>,
}

impl Record {
    pub(crate) fn new(
        record_id: u64,
        field_names: Arc<Vec<String>>,
        values: Vec<String>,
        field_index_cache: Arc<HashMap<String, usize>>,
    ) -> Self {
        Self {
            record_id,
            field_names,
            values,
            field_index_cache,
        }
    }

    /// The remote-assigned record identifier.
    #[must_use]
    pub fn record_id(&self) -> u64 {
        self.record_id
    }

    /// Field names of the record's layout, in layout order.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Get the index of a field by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the field
    ///
    /// # Returns
    ///
    /// The index of the field, or None if not found
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        // First check the cache
        if let Some(&idx) = self.field_index_cache.get(name) {
            return Some(idx);
        }

        // Fall back to linear search
        self.field_names.iter().position(|field| field == name)
    }

    /// Get a value by field name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the field
    ///
    /// # Returns
    ///
    /// The value of the field, or None if the field wasn't found
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = self.field_index(name)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Get a value by field index.
    ///
    /// # Arguments
    ///
    /// * `index` - The index of the field
    ///
    /// # Returns
    ///
    /// The value at the index, or None if the index is out of bounds
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Parse a field as a 64-bit integer.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name)?.trim().parse().ok()
    }

    /// Parse a field as a 64-bit float.
    #[must_use]
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name)?.trim().parse().ok()
    }

    /// Parse a field as a timestamp.
    ///
    /// Accepts both `YYYY-MM-DD HH:MM:SS` and the remote store's
    /// `MM/DD/YYYY HH:MM:SS` rendering.
    #[must_use]
    pub fn get_timestamp(&self, name: &str) -> Option<NaiveDateTime> {
        let text = self.get(name)?;
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%m/%d/%Y %H:%M:%S") {
            return Some(dt);
        }
        None
    }

    /// Render the record as a JSON object, record id included under
    /// `rec_id`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut map = JsonMap::new();
        map.insert("rec_id".to_string(), JsonValue::from(self.record_id));
        for (name, value) in self.field_names.iter().zip(&self.values) {
            map.insert(name.clone(), JsonValue::String(value.clone()));
        }
        JsonValue::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let names = Arc::new(vec![
            "name".to_string(),
            "age".to_string(),
            "joined".to_string(),
        ]);
        let cache = Arc::new(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| (n.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Record::new(
            7,
            names,
            vec![
                "Joe".to_string(),
                "41".to_string(),
                "03/01/2024 09:30:00".to_string(),
            ],
            cache,
        )
    }

    #[test]
    fn lookups_by_name_and_index_agree() {
        let rec = sample();
        assert_eq!(rec.get("name"), Some("Joe"));
        assert_eq!(rec.get_by_index(0), Some("Joe"));
        assert_eq!(rec.field_index("joined"), Some(2));
        assert_eq!(rec.get("missing"), None);
    }

    #[test]
    fn typed_accessors_parse_values() {
        let rec = sample();
        assert_eq!(rec.get_int("age"), Some(41));
        assert_eq!(rec.get_float("age"), Some(41.0));
        assert!(rec.get_timestamp("joined").is_some());
        assert_eq!(rec.get_int("name"), None);
    }

    #[test]
    fn json_rendering_injects_rec_id() {
        let json = sample().to_json();
        assert_eq!(json["rec_id"], 7);
        assert_eq!(json["name"], "Joe");
    }
}
