//! Streaming example
//!
//! Fetches one row per call; the file is reopened and the saved offset resumed
//! on every fetch, so only one row is held in memory at a time.

use std::error::Error;

use tabstream::{ReadOptions, RowCursor};

fn main() -> Result<(), Box<dyn Error>> {
    let options = ReadOptions::new().with_header(true);
    let mut cursor = RowCursor::open("demos/data.csv", options)?;

    while let Some(row) = cursor.read_row()? {
        println!("line {} (offset now {}): {:?}", row.index, cursor.offset(), row.to_strings());
    }

    if let Some(header) = cursor.headers() {
        println!("\nHeader was: {:?}", header.to_strings());
    }
    println!("Physical rows consumed: {}", cursor.row_count());

    Ok(())
}
