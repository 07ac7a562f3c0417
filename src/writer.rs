//! CSV output writer.
//!
//! The second stage of the export pipeline: serialize every record to a row
//! of textual cells and write a BOM, the header row, and the data rows to
//! the output sink in one unbroken sequence. Any sink error aborts the
//! export immediately.
//!
//! # Null handling
//!
//! Null fields are dropped from data rows entirely, never written as an
//! explicit empty value under their key. In practice that means a null in
//! the middle of a row leaves an empty cell to keep later columns aligned,
//! while a run of nulls at the end of a row is omitted altogether — the
//! header always lists every resolved field, so data rows can be narrower
//! than the header. The writer runs in flexible (variable-width) mode to
//! allow this.
//!
//! # Example
//!
//! ```
//! use querycsv::{ExportConfig, Record, RecordSet, write_csv};
//!
//! let records = RecordSet::new(vec![
//!     Record::new().with("name", "Alice").with("age", 30),
//!     Record::new().with("name", "Bob").with("age", Option::<i64>::None),
//! ]);
//!
//! let mut out = Vec::new();
//! write_csv(&records, &mut out, &ExportConfig::new())?;
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Alice,30"));
//! # Ok::<(), querycsv::ExportError>(())
//! ```

use std::collections::HashMap;
use std::io::Write;

use crate::config::{ExportConfig, FieldSerializer};
use crate::error::Result;
use crate::record::{Record, Value, DATETIME_FORMAT};
use crate::schema;
use crate::source::RecordSet;

/// Byte-order mark emitted before the header row so spreadsheet readers
/// recognize the stream as Unicode.
const BOM: &str = "\u{FEFF}";

/// Writes a record set as CSV to any writable sink.
///
/// The output is: BOM, header row, then one row per record, with quoting
/// and delimiters per the config's [`WriterOptions`](crate::WriterOptions).
///
/// # Errors
///
/// - [`ExportError::EmptyRecordSet`](crate::ExportError::EmptyRecordSet)
///   when the set has no rows (nothing is written to the sink).
/// - [`ExportError::Io`](crate::ExportError::Io) /
///   [`ExportError::Csv`](crate::ExportError::Csv) when the sink fails;
///   the export aborts at the failing row.
pub fn write_csv<W: Write>(records: &RecordSet, mut sink: W, config: &ExportConfig) -> Result<()> {
    let fields = schema::resolve_fields(records.records(), config.field_order.as_deref())?;
    let headers = schema::resolve_headers(&fields, records.model(), config);

    sink.write_all(BOM.as_bytes())?;

    let quote_style = if config.writer.always_quote {
        csv::QuoteStyle::Always
    } else {
        csv::QuoteStyle::Necessary
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.writer.delimiter)
        .quote(config.writer.quote)
        .terminator(config.writer.terminator.into())
        .quote_style(quote_style)
        .flexible(true)
        .from_writer(sink);

    writer.write_record(&headers)?;

    for record in records.records() {
        let row = serialize_record(record, &fields, &config.field_serializer_map);
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes a record set as CSV and returns it as a string.
///
/// Useful for tests and for handing the document to code that wants text
/// rather than a byte sink. The string starts with the BOM.
pub fn to_csv_string(records: &RecordSet, config: &ExportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

/// The default per-value serializer.
///
/// Datetimes render as ISO-8601 text; every other value renders through its
/// generic textual form. Custom serializers registered in the config replace
/// this on a per-field basis.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use querycsv::{Value, default_serializer};
///
/// let dt = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// assert_eq!(default_serializer(&Value::from(dt)), "2023-01-15T10:30:00");
/// assert_eq!(default_serializer(&Value::from(30)), "30");
/// ```
pub fn default_serializer(value: &Value) -> String {
    match value {
        Value::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        other => other.to_string(),
    }
}

/// Serializes one record into the textual cells of a CSV row.
///
/// Cells follow the resolved field order. Null and missing fields become
/// empty cells; trailing empty cells are then trimmed off so null-tailed
/// rows come out narrower than the header.
fn serialize_record(
    record: &Record,
    fields: &[String],
    serializers: &HashMap<String, FieldSerializer>,
) -> Vec<String> {
    let mut cells: Vec<Option<String>> = Vec::with_capacity(fields.len());

    for field in fields {
        let cell = match record.field(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(match serializers.get(field) {
                Some(serializer) => serializer(value),
                None => default_serializer(value),
            }),
        };
        cells.push(cell);
    }

    while matches!(cells.last(), Some(None)) {
        cells.pop();
    }

    cells.into_iter().map(Option::unwrap_or_default).collect()
}
