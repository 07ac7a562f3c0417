//! Command-line interface definition using clap.
//!
//! The CLI exports a JSON array of records to a CSV file. It covers the
//! library's export knobs — column ordering, header overrides, and the
//! writer pass-through options — without any model metadata (JSON input
//! carries no verbose names).

use clap::Parser;

/// Export a JSON array of records to CSV with configurable headers,
/// column ordering, and delimiters.
#[derive(Parser, Debug, Clone)]
#[command(name = "querycsv")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    querycsv people.json
    querycsv people.json -o people.csv
    querycsv people.json --fields name,age
    querycsv people.json --header age='Age in Years'
    querycsv people.json --tab --always-quote
    querycsv people.json --datestamp")]
pub struct Args {
    /// Path to input file (JSON array of objects)
    pub input: String,

    /// Path to output CSV file
    #[arg(short, long, default_value = "export.csv")]
    pub output: String,

    /// Fields to emit first, in order (comma-separated)
    #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Override a column header (repeatable)
    #[arg(long, value_name = "FIELD=TITLE", value_parser = parse_header_override)]
    pub header: Vec<(String, String)>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',', value_parser = parse_ascii_char)]
    pub delimiter: char,

    /// Use tab as the field delimiter
    #[arg(long, conflicts_with = "delimiter")]
    pub tab: bool,

    /// Quote every field, not just the ones that need it
    #[arg(long)]
    pub always_quote: bool,

    /// Append the current date to the output filename
    #[arg(long)]
    pub datestamp: bool,
}

fn parse_header_override(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(field, title)| (field.to_string(), title.to_string()))
        .filter(|(field, _)| !field.is_empty())
        .ok_or_else(|| format!("expected FIELD=TITLE, got '{s}'"))
}

fn parse_ascii_char(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected a single ASCII character, got '{s}'")),
    }
}
