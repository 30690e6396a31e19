//! Whole-buffer reading example
//!
//! Demonstrates:
//! - Reading a file into a typed table
//! - Header extraction and lookup by column name
//! - Column access with null markers for short rows

use std::error::Error;

use tabstream::{read_path, ReadOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let options = ReadOptions::new().with_header(true);
    let table = read_path("demos/data.csv", &options)?;

    if let Some(header) = table.header() {
        println!("Header: {:?}", header.to_strings());
    }

    println!("\nData rows:");
    for row in table.rows() {
        println!("  line {}: {:?}", row.index, row.to_strings());
    }

    println!("\nColumn \"score\":");
    if let Some(scores) = table.column_by_name("score") {
        for value in scores {
            match value {
                Some(cell) => println!("  {}", cell),
                None => println!("  <missing>"),
            }
        }
    }

    Ok(())
}
