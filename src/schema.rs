//! Field and header resolution.
//!
//! The first stage of the export pipeline: given the materialized records
//! and an optional field-order spec, decide which columns to emit, in what
//! order, and under which display headers.

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::record::Record;
use crate::source::ModelMeta;

/// Resolves the ordered field-name sequence for a record collection.
///
/// The schema is taken from the first record. When a field-order spec is
/// given, fields named in it (and present in the data) come first, in spec
/// order; the remaining fields follow in their natural order. Every field
/// appears exactly once; spec entries not present in the data are silently
/// dropped.
///
/// # Errors
///
/// Returns [`ExportError::EmptyRecordSet`] when there are no records, since
/// no schema can be inferred from zero rows.
pub fn resolve_fields(records: &[Record], field_order: Option<&[String]>) -> Result<Vec<String>> {
    let first = records.first().ok_or(ExportError::EmptyRecordSet)?;
    let names: Vec<String> = first.field_names().map(str::to_string).collect();

    let Some(order) = field_order else {
        return Ok(names);
    };

    let mut resolved: Vec<String> = Vec::with_capacity(names.len());
    for field in order {
        if names.contains(field) && !resolved.contains(field) {
            resolved.push(field.clone());
        }
    }
    for field in names {
        if !resolved.contains(&field) {
            resolved.push(field);
        }
    }

    Ok(resolved)
}

/// Resolves the display header for every field.
///
/// Each field maps to itself by default. When verbose names are enabled and
/// the field is registered in the model metadata, the verbose name takes
/// over; an entry in the config's header map overrides both.
pub fn resolve_headers(
    fields: &[String],
    model: Option<&ModelMeta>,
    config: &ExportConfig,
) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            if let Some(header) = config.field_header_map.get(field) {
                return header.clone();
            }
            if config.use_verbose_names {
                if let Some(verbose) = model.and_then(|m| m.verbose_name(field)) {
                    return verbose.to_string();
                }
            }
            field.clone()
        })
        .collect()
}
