//! Parse the published CSV export of the ledger sheet.
//!
//! The export carries a human-edited header row, data rows whose column
//! count may drift between sheet versions, and a generated subtotal row at
//! the bottom that must never reach the aggregation core.

use anyhow::{Context, Result};
use tally_core::Record;

/// Parse published-CSV text into records, newest entry first.
///
/// The header row supplies column labels exactly as typed in the sheet
/// (including stray whitespace, which the resolver tolerates). Cells a short
/// row lacks read as empty. The trailing subtotal row the export appends is
/// dropped, and the remaining rows are reversed so the most recent entry
/// leads.
pub fn parse_published_csv(text: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for result in rdr.records() {
        let row = result.context("reading sheet csv")?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    let Some(header) = rows.first() else {
        return Ok(Vec::new());
    };
    let labels: Vec<String> = header.iter().map(|h| h.to_string()).collect();

    let mut records: Vec<Record> = rows[1..]
        .iter()
        .map(|row| {
            let columns = labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), row.get(i).unwrap_or("").to_string()))
                .collect();
            Record::new(columns)
        })
        .collect();

    // The sheet appends a generated subtotal row; it is not an entry.
    records.pop();
    records.reverse();
    Ok(records)
}
