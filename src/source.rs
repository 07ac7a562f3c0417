//! The record-source input boundary.
//!
//! Exports consume a [`RecordSet`]: an optional [`ModelMeta`] describing the
//! originating model plus the materialized rows. There are exactly two ways
//! in, resolved once at the boundary rather than guessed per item:
//!
//! 1. **Already a mapping sequence** — build from [`Record`]s directly with
//!    [`RecordSet::new`] / [`RecordSet::with_model`].
//! 2. **Projectable to a mapping sequence** — [`RecordSet::from_values`]
//!    projects any `&[T: Serialize]` through serde; rows that do not
//!    serialize to a field mapping fail with
//!    [`ExportError::NotARecordSource`].
//!
//! # Example
//!
//! ```
//! use querycsv::{ModelMeta, Record, RecordSet};
//!
//! let model = ModelMeta::new("Person")
//!     .with_field("name", "Full Name")
//!     .with_field("age", "Age in Years");
//!
//! let records = RecordSet::new(vec![
//!     Record::new().with("name", "Alice").with("age", 30),
//! ])
//! .with_model(model);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.model().unwrap().verbose_name("name"), Some("Full Name"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::record::{Record, Value};

/// Display metadata for one model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Field name as it appears in records
    pub name: String,
    /// Human-readable display label for the field
    pub verbose_name: String,
}

/// Metadata of the model a record set originates from.
///
/// Carries the model name (used for default export filenames) and the
/// verbose names used as column headers when
/// [`use_verbose_names`](crate::ExportConfig::use_verbose_names) is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    name: String,
    fields: Vec<FieldMeta>,
}

impl ModelMeta {
    /// Creates metadata for a model with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style registration of a field and its verbose name.
    #[must_use]
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldMeta {
            name: name.into(),
            verbose_name: verbose_name.into(),
        });
        self
    }

    /// The model's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered fields, in registration order.
    pub fn fields(&self) -> &[FieldMeta] {
        &self.fields
    }

    /// Looks up the verbose name for a field, if the field is registered.
    pub fn verbose_name(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.verbose_name.as_str())
    }
}

/// A materialized collection of records ready for export.
///
/// All rows are resident in memory before any CSV is written; there is no
/// incremental read from the underlying source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    model: Option<ModelMeta>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates a record set from rows that are already field mappings.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            model: None,
            records,
        }
    }

    /// Attaches model metadata (verbose names, default filename source).
    #[must_use]
    pub fn with_model(mut self, model: ModelMeta) -> Self {
        self.model = Some(model);
        self
    }

    /// Projects arbitrary serializable rows into a record set.
    ///
    /// Each row is serialized through serde; rows must come out as field
    /// mappings (JSON objects). Anything else — a bare scalar, a tuple row
    /// without column names — is not a record source.
    ///
    /// # Example
    ///
    /// ```
    /// use querycsv::RecordSet;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Person {
    ///     name: String,
    ///     age: Option<u8>,
    /// }
    ///
    /// let rows = vec![Person { name: "Alice".into(), age: Some(30) }];
    /// let records = RecordSet::from_values(&rows)?;
    /// assert_eq!(records.len(), 1);
    /// # Ok::<(), querycsv::ExportError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotARecordSource`] when a row does not
    /// serialize to a field mapping.
    pub fn from_values<T: Serialize>(rows: &[T]) -> Result<Self> {
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let json = serde_json::to_value(row).map_err(|e| {
                ExportError::not_a_record_source(format!("row {index} failed to serialize: {e}"))
            })?;

            match json {
                serde_json::Value::Object(map) => {
                    records.push(
                        map.into_iter()
                            .map(|(k, v)| (k, Value::from_json(v)))
                            .collect(),
                    );
                }
                other => {
                    return Err(ExportError::not_a_record_source(format!(
                        "row {index} is not a field mapping (got {})",
                        json_kind(&other)
                    )));
                }
            }
        }

        Ok(Self::new(records))
    }

    /// The rows, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Model metadata, if attached.
    pub fn model(&self) -> Option<&ModelMeta> {
        self.model.as_ref()
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the rows in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "a field mapping",
    }
}
