//! The working record list
//!
//! Lifecycle invariants:
//! - the list always holds at least one record
//! - clear resets to a single empty record
//! - every record key is declared by the schema
//! - multiselect values stay subsets of the field's option list, with
//!   insertion order preserved and duplicates dropped

use super::errors::{RosterError, RosterResult};
use super::record::{Record, Value};
use crate::schema::{FieldKind, Schema};

/// Ordered, schema-bound list of records under edit.
#[derive(Debug)]
pub struct RecordList<'a> {
    schema: &'a Schema,
    records: Vec<Record>,
}

impl<'a> RecordList<'a> {
    /// Creates a list holding a single empty record.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            records: vec![Record::empty(schema)],
        }
    }

    /// Creates a list seeded from the schema's default records.
    pub fn with_defaults(schema: &'a Schema) -> Self {
        Self::from_records(schema, schema.default_records.clone())
    }

    /// Creates a list from previously stored records, conforming each one to
    /// the schema: unknown keys are dropped, missing keys are filled with
    /// empty values, and multiselect values are clipped to the option list.
    /// An empty input yields a single empty record.
    pub fn from_records(schema: &'a Schema, records: Vec<Record>) -> Self {
        let mut conformed: Vec<Record> = records
            .into_iter()
            .map(|r| conform(schema, r))
            .collect();
        if conformed.is_empty() {
            conformed.push(Record::empty(schema));
        }
        Self {
            schema,
            records: conformed,
        }
    }

    /// The schema this list is bound to.
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Read-only view of the records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the list is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends an empty record and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.records.push(Record::empty(self.schema));
        self.records.len() - 1
    }

    /// Removes the record at the index. Rejected when it is the sole record.
    pub fn remove_row(&mut self, index: usize) -> RosterResult<()> {
        if index >= self.records.len() {
            return Err(RosterError::IndexOutOfBounds(index));
        }
        if self.records.len() == 1 {
            return Err(RosterError::LastRecord);
        }
        self.records.remove(index);
        Ok(())
    }

    /// Resets the list to a single empty record.
    pub fn clear(&mut self) {
        self.records = vec![Record::empty(self.schema)];
    }

    /// Sets one field of one record, enforcing kind and option constraints.
    pub fn set_field(&mut self, index: usize, key: &str, value: Value) -> RosterResult<()> {
        let field = self
            .schema
            .field(key)
            .ok_or_else(|| RosterError::UnknownField(key.to_string()))?;

        let record = self
            .records
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfBounds(index))?;

        match (field.kind, value) {
            (FieldKind::Multiselect, Value::Selection(options)) => {
                let mut selected: Vec<String> = Vec::with_capacity(options.len());
                for option in options {
                    if !field.options.contains(&option) {
                        return Err(RosterError::UnknownOption {
                            field: key.to_string(),
                            option,
                        });
                    }
                    if !selected.contains(&option) {
                        selected.push(option);
                    }
                }
                record.set(key, Value::Selection(selected));
            }
            (FieldKind::Multiselect, Value::Text(_)) => {
                return Err(RosterError::KindMismatch {
                    field: key.to_string(),
                    expected: "selection",
                });
            }
            (_, Value::Text(text)) => {
                record.set(key, Value::Text(text));
            }
            (_, Value::Selection(_)) => {
                return Err(RosterError::KindMismatch {
                    field: key.to_string(),
                    expected: "text",
                });
            }
        }

        Ok(())
    }

    /// Consumes the list, yielding the owned records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

fn conform(schema: &Schema, mut record: Record) -> Record {
    let unknown: Vec<String> = record
        .keys()
        .filter(|k| schema.field(k).is_none())
        .cloned()
        .collect();
    for key in unknown {
        record.remove(&key);
    }

    for field in &schema.fields {
        match record.get(&field.key) {
            None => record.set(field.key.clone(), Value::empty_for(field.kind)),
            Some(value) => {
                // Repair kind drift from older stored payloads.
                let wrong_kind = matches!(
                    (field.kind, value),
                    (FieldKind::Multiselect, Value::Text(_))
                ) || matches!(
                    (field.kind, value),
                    (FieldKind::Text | FieldKind::Email | FieldKind::Url, Value::Selection(_))
                );
                if wrong_kind {
                    record.set(field.key.clone(), Value::empty_for(field.kind));
                } else if field.kind == FieldKind::Multiselect {
                    let kept: Vec<String> = record
                        .selection(&field.key)
                        .iter()
                        .filter(|o| field.options.contains(o))
                        .cloned()
                        .collect();
                    record.set(field.key.clone(), Value::Selection(kept));
                }
            }
        }
    }

    record
}
