//! tally-remote: HTTP collaborators around the dashboard core — fetching
//! the published sheet CSV and submitting new entries to its companion
//! write endpoint.

pub mod client;
pub mod entry;

pub use client::SheetClient;
pub use entry::NewEntry;
