// src/output.rs
// =============================================================================
// This module writes the collected link records to the CSV file.
//
// The format is deliberately bare:
// - One line per anchor: FileName,LinkText,LinkHref
// - No header row
// - No quoting or escaping - a comma inside the link text simply lands
//   in the output as-is (consumers of this csv know that)
// - Lines joined with "\n", no trailing newline
//
// The file is written exactly once, after every extraction finished,
// replacing whatever was there before.
//
// Rust concepts:
// - Iterator chains: flatten() merges the per-file lists
// - fs::write: Create-or-truncate write in one call
// =============================================================================

use anyhow::{Context, Result};
use std::fs;

use crate::extract::LinkRecord;

// Flattens the per-file record lists and writes the CSV
//
// Parameters:
//   path: the output file name (already carries the .csv extension)
//   results: one Vec<LinkRecord> per processed file
//
// Returns: how many records were written.
pub fn write_csv(path: &str, results: Vec<Vec<LinkRecord>>) -> Result<usize> {
    let lines: Vec<String> = results
        .into_iter()
        .flatten()
        .map(|record| format!("{},{},{}", record.file_name, record.text, record.href))
        .collect();

    let count = lines.len();

    // fs::write truncates an existing file, which gives us the
    // "overwrite on rerun" behavior for free
    fs::write(path, lines.join("\n"))
        .with_context(|| format!("failed to write output file '{}'", path))?;

    Ok(count)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does flatten() do?
//    - Turns an iterator of collections into one flat iterator
//    - [[a, b], [], [c]] becomes [a, b, c]
//    - Empty per-file lists just disappear, as they should
//
// 2. Why no csv library?
//    - A csv writer would quote fields containing commas or markup
//    - This tool's contract is the raw comma-joined line, so a proper
//      csv encoder would actually change the output
//
// 3. What is fs::write?
//    - Opens (creating or truncating), writes all bytes, closes
//    - The one-call version of open + write_all
// -----------------------------------------------------------------------------
