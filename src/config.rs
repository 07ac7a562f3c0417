//! Export configuration types.
//!
//! [`ExportConfig`] is the explicit replacement for an untyped options map:
//! the four knobs the export pipeline itself understands are named fields,
//! and everything destined for the underlying line writer lives in the
//! [`WriterOptions`] pass-through bag.
//!
//! # Example
//!
//! ```rust
//! use querycsv::{ExportConfig, Value, WriterOptions};
//!
//! let config = ExportConfig::new()
//!     .with_field_order(["name", "age"])
//!     .with_header("age", "Age in Years")
//!     .with_serializer("age", |v: &Value| format!("{v} yrs"))
//!     .with_writer(WriterOptions::new().with_delimiter(b';'));
//!
//! assert!(config.use_verbose_names);
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::record::Value;

/// A per-field serializer: raw value in, textual cell out.
///
/// Custom serializers take precedence over the default serializer and are
/// never invoked for null values (null fields are dropped before
/// serialization).
pub type FieldSerializer = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Configuration for one export.
///
/// The defaults reproduce the plain export: no header overrides, no custom
/// serializers, verbose names enabled, natural field order, comma-separated
/// quoted CSV.
pub struct ExportConfig {
    /// Field name → display header, applied last (highest precedence).
    pub field_header_map: HashMap<String, String>,
    /// Field name → custom serializer, applied before the default serializer.
    pub field_serializer_map: HashMap<String, FieldSerializer>,
    /// Use model verbose names as headers where available (default: true).
    pub use_verbose_names: bool,
    /// Fields to emit first, in this order (default: none).
    pub field_order: Option<Vec<String>>,
    /// Options forwarded verbatim to the line writer.
    pub writer: WriterOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            field_header_map: HashMap::new(),
            field_serializer_map: HashMap::new(),
            use_verbose_names: true,
            field_order: None,
            writer: WriterOptions::default(),
        }
    }
}

impl ExportConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the display header for a field.
    #[must_use]
    pub fn with_header(mut self, field: impl Into<String>, header: impl Into<String>) -> Self {
        self.field_header_map.insert(field.into(), header.into());
        self
    }

    /// Registers a custom serializer for a field.
    #[must_use]
    pub fn with_serializer(
        mut self,
        field: impl Into<String>,
        serializer: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.field_serializer_map
            .insert(field.into(), Box::new(serializer));
        self
    }

    /// Enables or disables verbose-name headers.
    #[must_use]
    pub fn with_verbose_names(mut self, enabled: bool) -> Self {
        self.use_verbose_names = enabled;
        self
    }

    /// Sets the priority ordering for output columns.
    ///
    /// Fields named here come first, in the given order; remaining fields
    /// follow in their natural order. Names not present in the data are
    /// silently dropped.
    #[must_use]
    pub fn with_field_order<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the line-writer pass-through options.
    #[must_use]
    pub fn with_writer(mut self, writer: WriterOptions) -> Self {
        self.writer = writer;
        self
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer_fields: Vec<&str> = self
            .field_serializer_map
            .keys()
            .map(String::as_str)
            .collect();
        serializer_fields.sort_unstable();

        f.debug_struct("ExportConfig")
            .field("field_header_map", &self.field_header_map)
            .field("field_serializer_map", &serializer_fields)
            .field("use_verbose_names", &self.use_verbose_names)
            .field("field_order", &self.field_order)
            .field("writer", &self.writer)
            .finish()
    }
}

/// Options forwarded verbatim to the CSV line writer.
///
/// These never influence field resolution or serialization; they only shape
/// how finished rows are written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator (default: CRLF)
    pub terminator: LineTerminator,
    /// Quote every field, not just the ones that need it (default: false)
    pub always_quote: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            terminator: LineTerminator::Crlf,
            always_quote: false,
        }
    }
}

impl WriterOptions {
    /// Creates writer options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Quotes every field unconditionally.
    #[must_use]
    pub fn with_always_quote(mut self, always: bool) -> Self {
        self.always_quote = always;
        self
    }
}

/// Line terminator written after each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Windows-style (CRLF), the conventional CSV default
    Crlf,
    /// Unix-style (LF)
    Lf,
    /// Mac classic (CR)
    Cr,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(terminator: LineTerminator) -> Self {
        match terminator {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::Cr => csv::Terminator::Any(b'\r'),
        }
    }
}
