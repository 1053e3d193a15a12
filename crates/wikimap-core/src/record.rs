//! Field records.
//!
//! A [`FieldRecord`] maps a field name to the ordered list of distinct values
//! observed for it. Values keep first-seen order; re-adding a value is a no-op.

use log::trace;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Mapping from field name to its de-duplicated, ordered values.
///
/// # Example
///
/// ```
/// use wikimap_core::FieldRecord;
///
/// let mut record = FieldRecord::new();
/// assert!(record.add("foo", "bar"));
/// assert!(record.add("foo", "aba"));
/// assert!(!record.add("foo", "bar"));
/// assert_eq!(record.get("foo"), Some(&["bar".to_string(), "aba".to_string()][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldRecord {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under `key`.
    ///
    /// Creates the key when absent. Returns `true` if the record changed.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        let values = self.fields.entry(key).or_default();
        if values.contains(&value) {
            return false;
        }
        trace!("field record: appending {value:?}");
        values.push(value);
        true
    }

    /// Values recorded under `key`, in insertion order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    /// Checks whether `key` has been recorded.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no keys are recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(key, values)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Repeated values are dropped, keeping the first occurrence.
impl From<BTreeMap<String, Vec<String>>> for FieldRecord {
    fn from(fields: BTreeMap<String, Vec<String>>) -> Self {
        let mut record = Self::new();
        for (key, values) in fields {
            let kept = record.fields.entry(key).or_default();
            for value in values {
                if !kept.contains(&value) {
                    kept.push(value);
                }
            }
        }
        record
    }
}

impl<'de> Deserialize<'de> for FieldRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, Vec<String>>::deserialize(deserializer).map(Self::from)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.add(k, v);
        }
        record
    }
}

/// Adds `value` to `record` under `key`, skipping duplicates.
///
/// Free-function form of [`FieldRecord::add`]; the record is mutated in place.
pub fn add_to_field(record: &mut FieldRecord, key: impl Into<String>, value: impl Into<String>) {
    record.add(key, value);
}
