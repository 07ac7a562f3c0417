//! # querycsv
//!
//! A Rust library for exporting tabular records — rows of a query result —
//! into CSV, with configurable column headers, column ordering, and
//! per-field serializers.
//!
//! ## Overview
//!
//! The export pipeline has two stages:
//!
//! 1. **Schema resolution** — the ordered column list is inferred from the
//!    records (optionally reordered by a field-order spec), and each column
//!    gets a display header (verbose names from model metadata, overridable
//!    per field).
//! 2. **Row serialization** — every value becomes a textual cell (ISO-8601
//!    for datetimes, a custom serializer where one is registered), null
//!    fields are dropped from their rows, and the document is written with
//!    a leading BOM for spreadsheet compatibility.
//!
//! The whole pipeline is synchronous and fail-fast: records are fully
//! materialized before the header is written, and the first sink error
//! aborts the export.
//!
//! ## Quick Start
//!
//! ```rust
//! use querycsv::{ExportConfig, Record, RecordSet, to_csv_string};
//!
//! fn main() -> querycsv::Result<()> {
//!     let records = RecordSet::new(vec![
//!         Record::new().with("name", "Alice").with("age", 30),
//!         Record::new().with("name", "Bob").with("age", Option::<i64>::None),
//!     ]);
//!
//!     let csv = to_csv_string(&records, &ExportConfig::new())?;
//!     assert!(csv.contains("name,age"));
//!     assert!(csv.contains("Alice,30"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Exporting your own types
//!
//! Any slice of `Serialize` rows can be projected into a record set:
//!
//! ```rust
//! use querycsv::RecordSet;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: Option<u8>,
//! }
//!
//! let rows = vec![Person { name: "Alice".into(), age: Some(30) }];
//! let records = RecordSet::from_values(&rows)?;
//! # Ok::<(), querycsv::ExportError>(())
//! ```
//!
//! ## Serving a download
//!
//! [`render_to_csv_response`] packages the CSV with the headers a file
//! download needs (`Content-Type`, `Content-Disposition`, `Cache-Control`),
//! ready to hand to any web framework.
//!
//! ## Module Structure
//!
//! - [`record`] — [`Record`] and [`Value`], the row model
//! - [`source`] — [`RecordSet`], [`ModelMeta`]: the input boundary
//! - [`schema`] — column ordering and header resolution
//! - [`config`] — [`ExportConfig`], [`WriterOptions`]
//! - [`writer`] — [`write_csv`], [`to_csv_string`], [`default_serializer`]
//! - [`filename`] — filename cleaning, datestamping, defaults
//! - [`response`] — [`CsvResponse`], [`render_to_csv_response`]
//! - [`error`] — [`ExportError`], [`Result`]
//! - [`cli`] — CLI argument types (requires the `cli` feature)
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod record;
pub mod response;
pub mod schema;
pub mod source;
pub mod writer;

// Re-export the main types at the crate root for convenience
pub use config::{ExportConfig, FieldSerializer, LineTerminator, WriterOptions};
pub use error::{ExportError, Result};
pub use record::{Record, Value};
pub use response::{CsvResponse, render_to_csv_response};
pub use source::{FieldMeta, ModelMeta, RecordSet};
pub use writer::{default_serializer, to_csv_string, write_csv};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use querycsv::prelude::*;
/// ```
pub mod prelude {
    // Row model
    pub use crate::record::{Record, Value};

    // Input boundary
    pub use crate::source::{FieldMeta, ModelMeta, RecordSet};

    // Configuration
    pub use crate::config::{ExportConfig, LineTerminator, WriterOptions};

    // Export pipeline
    pub use crate::writer::{default_serializer, to_csv_string, write_csv};

    // Filenames and responses
    pub use crate::filename::{append_datestamp, clean_filename, generate_filename};
    pub use crate::response::{CsvResponse, render_to_csv_response};

    // Error types
    pub use crate::error::{ExportError, Result};
}
