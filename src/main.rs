//! # querycsv CLI
//!
//! Command-line interface for the querycsv library.

use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use querycsv::cli::Args;
use querycsv::filename::{append_datestamp, clean_filename};
use querycsv::{ExportConfig, ExportError, RecordSet, WriterOptions, write_csv};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> querycsv::Result<()> {
    let total_start = Instant::now();
    let args = Args::parse();

    let output_path = resolve_output_path(&args.output, args.datestamp)?;

    println!("📦 querycsv v{}", env!("CARGO_PKG_VERSION"));
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path.display());

    let raw = fs::read_to_string(&args.input)?;
    let rows = parse_rows(&raw)?;
    let records = RecordSet::from_values(&rows)?;
    println!("   Found {} records", records.len());

    let config = build_config(&args);
    let file = fs::File::create(&output_path)?;
    write_csv(&records, BufWriter::new(file), &config)?;

    println!(
        "✅ Done! Exported {} records in {:.2}s",
        records.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Parses the input as a JSON array of rows.
fn parse_rows(raw: &str) -> querycsv::Result<Vec<serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| ExportError::not_a_record_source(format!("input is not valid JSON: {e}")))?;

    match value {
        serde_json::Value::Array(rows) => Ok(rows),
        _ => Err(ExportError::not_a_record_source(
            "input is not a JSON array of records",
        )),
    }
}

/// Applies cleaning and datestamping to the output filename when requested.
fn resolve_output_path(output: &str, datestamp: bool) -> querycsv::Result<PathBuf> {
    let path = PathBuf::from(output);
    if !datestamp {
        return Ok(path);
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(output);
    let stamped = append_datestamp(&clean_filename(name)?)?;
    Ok(path.with_file_name(stamped))
}

fn build_config(args: &Args) -> ExportConfig {
    let delimiter = if args.tab { b'\t' } else { args.delimiter as u8 };

    let mut config = ExportConfig::new().with_writer(
        WriterOptions::new()
            .with_delimiter(delimiter)
            .with_always_quote(args.always_quote),
    );

    if let Some(fields) = &args.fields {
        config = config.with_field_order(fields.clone());
    }
    for (field, title) in &args.header {
        config = config.with_header(field.as_str(), title.as_str());
    }

    config
}
