//! Record and value types for tabular export.
//!
//! This module provides [`Record`], the field-name → [`Value`] mapping that
//! represents one row of exported data. Records preserve field insertion
//! order, which is observable in the produced CSV: columns without an
//! explicit ordering come out in the order they entered the record.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use querycsv::{Record, Value};
//!
//! let record = Record::new()
//!     .with("name", "Alice")
//!     .with("age", 30);
//!
//! assert_eq!(record.field("name"), Some(&Value::from("Alice")));
//! assert_eq!(record.len(), 2);
//! ```
//!
//! ## Null fields
//!
//! ```
//! use querycsv::{Record, Value};
//!
//! let record = Record::new()
//!     .with("name", "Bob")
//!     .with("age", Option::<i64>::None);
//!
//! assert!(record.field("age").is_some_and(Value::is_null));
//! ```
//!
//! ## Serialization
//!
//! ```
//! use querycsv::Record;
//!
//! let record = Record::new().with("name", "Alice");
//! let json = serde_json::to_string(&record)?;
//! let parsed: Record = serde_json::from_str(&json)?;
//!
//! assert_eq!(record, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The ISO-8601 rendering used for datetime cells.
///
/// `%.f` prints the fractional seconds only when they are non-zero, so a
/// whole-second datetime renders as `2023-01-15T10:30:00`.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single heterogeneous cell value.
///
/// Query results carry a small set of scalar types; everything a record can
/// hold is one of these. Null is a first-class value because the export
/// pipeline treats null fields specially (they are dropped from data rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Naive wall-clock datetime (no timezone offset)
    DateTime(NaiveDateTime),
    /// Text
    Text(String),
}

impl Value {
    /// Returns `true` if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts a JSON value into a cell value.
    ///
    /// Strings that parse as ISO-8601 naive datetimes become
    /// [`Value::DateTime`]; nested arrays and objects are stringified to
    /// their JSON text form.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => {
                match NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT) {
                    Ok(dt) => Value::DateTime(dt),
                    Err(_) => Value::Text(s),
                }
            }
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Text(nested.to_string())
            }
        }
    }
}

impl fmt::Display for Value {
    /// The generic textual form of a value.
    ///
    /// Null renders as the empty string; datetimes render as ISO-8601.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.naive_utc())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// One row of exported data: an insertion-ordered mapping from field name
/// to [`Value`].
///
/// # Construction
///
/// Use [`Record::new`] with the [`with`](Record::with) builder, or collect
/// from an iterator of pairs:
///
/// ```
/// use querycsv::{Record, Value};
///
/// let record: Record = [("name", Value::from("Alice")), ("age", Value::from(30))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion. A repeated field name overwrites the
    /// earlier value but keeps its original position.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a field, overwriting any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields (null fields included).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }
}
