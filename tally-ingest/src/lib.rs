//! tally-ingest: published-sheet CSV parsing into dashboard records.

pub mod sheet_csv;

pub use sheet_csv::parse_published_csv;
