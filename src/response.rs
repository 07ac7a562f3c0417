//! Downloadable CSV response helper.
//!
//! [`render_to_csv_response`] provides the boilerplate for serving an export
//! as a file download: it resolves the filename, runs the CSV pipeline into
//! an in-memory body, and pairs the body with the three response headers a
//! CSV attachment needs. The result is framework-agnostic; hand
//! [`CsvResponse::headers`] and [`CsvResponse::into_body`] to whatever web
//! stack serves the bytes.
//!
//! # Example
//!
//! ```
//! use querycsv::{ExportConfig, Record, RecordSet, render_to_csv_response};
//!
//! let records = RecordSet::new(vec![Record::new().with("name", "Alice")]);
//! let response = render_to_csv_response(&records, Some("My Report.csv"), false, &ExportConfig::new())?;
//!
//! assert_eq!(response.filename(), "my-report.csv");
//! assert_eq!(response.content_type(), "text/csv");
//! # Ok::<(), querycsv::ExportError>(())
//! ```

use crate::config::ExportConfig;
use crate::error::Result;
use crate::filename::{append_datestamp, clean_filename, generate_filename};
use crate::source::RecordSet;
use crate::writer::write_csv;

/// A CSV document packaged as a downloadable web response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvResponse {
    filename: String,
    body: Vec<u8>,
}

impl CsvResponse {
    /// The resolved (cleaned or generated) download filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// `Content-Type` header value.
    pub fn content_type(&self) -> &'static str {
        "text/csv"
    }

    /// `Content-Disposition` header value.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={};", self.filename)
    }

    /// `Cache-Control` header value.
    pub fn cache_control(&self) -> &'static str {
        "no-cache"
    }

    /// All response headers as `(name, value)` pairs.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", self.content_type().to_string()),
            ("Content-Disposition", self.content_disposition()),
            ("Cache-Control", self.cache_control().to_string()),
        ]
    }

    /// The CSV document bytes (BOM included).
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Renders a record set into a downloadable CSV response.
///
/// A supplied filename is validated and cleaned (and datestamped when
/// requested); with no filename, a default is generated from the record
/// set's model. Errors from filename validation and from the CSV pipeline
/// propagate untranslated.
pub fn render_to_csv_response(
    records: &RecordSet,
    filename: Option<&str>,
    with_datestamp: bool,
    config: &ExportConfig,
) -> Result<CsvResponse> {
    let filename = match filename {
        Some(name) => {
            let cleaned = clean_filename(name)?;
            if with_datestamp {
                append_datestamp(&cleaned)?
            } else {
                cleaned
            }
        }
        None => generate_filename(records, with_datestamp),
    };

    let mut body = Vec::new();
    write_csv(records, &mut body, config)?;

    Ok(CsvResponse { filename, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::source::ModelMeta;

    fn sample_records() -> RecordSet {
        RecordSet::new(vec![
            Record::new().with("name", "Alice").with("age", 30),
            Record::new().with("name", "Bob").with("age", 25),
        ])
        .with_model(ModelMeta::new("Person"))
    }

    #[test]
    fn test_response_headers() {
        let response =
            render_to_csv_response(&sample_records(), Some("people.csv"), false, &ExportConfig::new())
                .unwrap();

        assert_eq!(response.content_type(), "text/csv");
        assert_eq!(
            response.content_disposition(),
            "attachment; filename=people.csv;"
        );
        assert_eq!(response.cache_control(), "no-cache");

        let headers = response.headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[0].0, "Content-Type");
    }

    #[test]
    fn test_response_cleans_supplied_filename() {
        let response =
            render_to_csv_response(&sample_records(), Some("My Report.csv"), false, &ExportConfig::new())
                .unwrap();
        assert_eq!(response.filename(), "my-report.csv");
    }

    #[test]
    fn test_response_rejects_bad_extension() {
        let err =
            render_to_csv_response(&sample_records(), Some("report.xlsx"), false, &ExportConfig::new())
                .unwrap_err();
        assert!(err.is_filename());
    }

    #[test]
    fn test_response_generates_default_filename() {
        let response =
            render_to_csv_response(&sample_records(), None, false, &ExportConfig::new()).unwrap();
        assert_eq!(response.filename(), "person_export.csv");
    }

    #[test]
    fn test_response_datestamps_supplied_filename() {
        let response =
            render_to_csv_response(&sample_records(), Some("people.csv"), true, &ExportConfig::new())
                .unwrap();
        assert!(response.filename().starts_with("people_"));
        assert!(response.filename().ends_with(".csv"));
    }

    #[test]
    fn test_response_body_is_csv_with_bom() {
        let response =
            render_to_csv_response(&sample_records(), None, false, &ExportConfig::new()).unwrap();

        let body = response.into_body();
        assert!(body.starts_with("\u{FEFF}".as_bytes()));
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("Alice,30"));
    }

    #[test]
    fn test_response_empty_records_propagates_error() {
        let records = RecordSet::new(vec![]);
        let err =
            render_to_csv_response(&records, None, false, &ExportConfig::new()).unwrap_err();
        assert!(err.is_empty_record_set());
    }
}
