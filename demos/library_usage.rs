//! Demonstrates library usage of querycsv: projecting typed rows into a
//! record set, configuring the export, and rendering a downloadable
//! response.
//!
//! Run with: `cargo run --example library_usage`

use querycsv::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Person {
    name: String,
    email: String,
    age: Option<u8>,
}

fn main() -> querycsv::Result<()> {
    let rows = vec![
        Person {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            age: Some(30),
        },
        Person {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            age: None,
        },
    ];

    // Project typed rows into records, attach model metadata for headers.
    let records = RecordSet::from_values(&rows)?.with_model(
        ModelMeta::new("Person")
            .with_field("name", "Full Name")
            .with_field("email", "Email Address")
            .with_field("age", "Age in Years"),
    );

    // Configure the export: email first, custom age serializer.
    let config = ExportConfig::new()
        .with_field_order(["email", "name"])
        .with_serializer("age", |v: &Value| format!("{v} yrs"));

    let csv = to_csv_string(&records, &config)?;
    println!("--- CSV document ---");
    print!("{}", csv.trim_start_matches('\u{FEFF}'));

    // Or package it as a downloadable response.
    let response = render_to_csv_response(&records, Some("People Report.csv"), true, &config)?;
    println!("--- Response ---");
    for (name, value) in response.headers() {
        println!("{name}: {value}");
    }
    println!("{} bytes of CSV", response.body().len());

    Ok(())
}
