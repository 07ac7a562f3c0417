//! Export filename helpers.
//!
//! Cleaning, datestamping, and default generation of `.csv` filenames.
//! Cleaning is the gate: [`append_datestamp`] refuses names that were not
//! first passed through [`clean_filename`], so a datestamped name is always
//! a clean one.

use chrono::Local;

use crate::error::{ExportError, Result};
use crate::source::RecordSet;

/// Reduces text to a filename-safe slug.
///
/// Lowercases, keeps alphanumerics and underscores, collapses whitespace
/// and hyphen runs into single hyphens, and drops everything else. Leading
/// and trailing hyphens/underscores are trimmed.
///
/// # Example
///
/// ```
/// use querycsv::filename::slugify;
///
/// assert_eq!(slugify("My Report (final)"), "my-report-final");
/// assert_eq!(slugify("person_export"), "person_export");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug.trim_matches(['-', '_']).to_string()
}

/// Validates and cleans an export filename.
///
/// A name carrying an extension must end in exactly `.csv` (the check is
/// case-sensitive, so `report.CSV` is rejected). The base name is slugified
/// and the `.csv` extension re-appended.
///
/// # Example
///
/// ```
/// use querycsv::filename::clean_filename;
///
/// assert_eq!(clean_filename("My Report.csv")?, "my-report.csv");
/// assert_eq!(clean_filename("summary")?, "summary.csv");
/// assert!(clean_filename("My Report.CSV").is_err());
/// # Ok::<(), querycsv::ExportError>(())
/// ```
///
/// # Errors
///
/// Returns [`ExportError::InvalidFilename`] for any extension other than
/// `.csv`.
pub fn clean_filename(filename: &str) -> Result<String> {
    let base = if filename.contains('.') {
        filename
            .strip_suffix(".csv")
            .ok_or_else(|| ExportError::invalid_filename(filename))?
    } else {
        filename
    };

    Ok(format!("{}.csv", slugify(base)))
}

/// Appends the current date (`_YYYYMMDD`) before the `.csv` extension.
///
/// The filename must already be clean; validation and cleaning are separate
/// steps and are not performed here.
///
/// # Example
///
/// ```
/// use querycsv::filename::{append_datestamp, clean_filename};
///
/// let clean = clean_filename("My Report.csv")?;
/// let stamped = append_datestamp(&clean)?;
/// assert!(stamped.starts_with("my-report_"));
/// assert!(stamped.ends_with(".csv"));
/// # Ok::<(), querycsv::ExportError>(())
/// ```
///
/// # Errors
///
/// Returns [`ExportError::UnvalidatedFilename`] when the name differs from
/// its cleaned form, and [`ExportError::InvalidFilename`] when it does not
/// pass validation at all.
pub fn append_datestamp(filename: &str) -> Result<String> {
    if clean_filename(filename)? != filename {
        return Err(ExportError::unvalidated_filename(filename));
    }

    // the validation above guarantees the .csv suffix
    let stem = filename.strip_suffix(".csv").unwrap_or(filename);
    Ok(format!("{}_{}.csv", stem, today_stamp()))
}

/// Derives a default export filename from the record set's model.
///
/// The name is `<model-slug>_export.csv` (`records_export.csv` when the set
/// carries no model metadata), optionally datestamped. Generated names are
/// clean by construction.
pub fn generate_filename(records: &RecordSet, with_datestamp: bool) -> String {
    let slug = records
        .model()
        .map(|model| slugify(model.name()))
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| "records".to_string());

    if with_datestamp {
        format!("{}_export_{}.csv", slug, today_stamp())
    } else {
        format!("{}_export.csv", slug)
    }
}

fn today_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}
