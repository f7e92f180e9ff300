//! Record value types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{FieldKind, Schema};

/// A single field value: text kinds hold a string, multiselect holds the
/// selected options in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// text / email / url value
    Text(String),
    /// multiselect value
    Selection(Vec<String>),
}

impl Value {
    /// The empty value for a field of the given kind.
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Multiselect => Value::Selection(Vec::new()),
            _ => Value::Text(String::new()),
        }
    }

    /// Whether the value counts as empty: blank text or an empty selection.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => s.trim().is_empty(),
            Value::Selection(v) => v.is_empty(),
        }
    }
}

/// One roster entry, keyed by schema field key.
///
/// Serializes flat, e.g. `{"talentName":"Jane","sports":["Tennis"]}`, which
/// is also the stored payload element shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with the empty value for every field of the schema.
    pub fn empty(schema: &Schema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.key.clone(), Value::empty_for(f.kind)))
            .collect();
        Self { values }
    }

    /// Returns the value stored under the key, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the text value under the key, or "" when absent or not text.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(Value::Text(s)) => s,
            _ => "",
        }
    }

    /// Returns the selected options under the key, or an empty slice.
    pub fn selection(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(Value::Selection(v)) => v,
            _ => &[],
        }
    }

    /// Whether the value under the key is absent or empty.
    pub fn is_blank(&self, key: &str) -> bool {
        self.values.get(key).map_or(true, Value::is_blank)
    }

    /// Iterates the keys present on this record.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Builder-style text setter.
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, Value::Text(value.into()));
        self
    }

    /// Builder-style selection setter.
    pub fn with_selection<I, S>(mut self, key: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(
            key,
            Value::Selection(options.into_iter().map(Into::into).collect()),
        );
        self
    }
}
