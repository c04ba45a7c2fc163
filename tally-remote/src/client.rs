//! HTTP client for the published sheet (read) and its write endpoint.

use anyhow::{Context, Result, bail};
use tally_core::Record;
use tally_ingest::parse_published_csv;

use crate::entry::NewEntry;

pub struct SheetClient {
    http: reqwest::Client,
    csv_url: String,
    api_url: String,
}

impl SheetClient {
    pub fn new(csv_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            csv_url: csv_url.into(),
            api_url: api_url.into(),
        }
    }

    /// Download and parse the published CSV.
    ///
    /// Returns a complete record set. Callers swap it in wholesale, so a
    /// half-finished reload is never observable; on any failure the caller
    /// keeps whatever set it already had.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let resp = self
            .http
            .get(&self.csv_url)
            .send()
            .await
            .context("fetch sheet csv")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("sheet fetch failed: {status}");
        }

        let text = resp.text().await.context("read sheet csv body")?;
        parse_published_csv(&text)
    }

    /// Submit a new entry to the write endpoint.
    ///
    /// No retry and no local patching of the record set: the sheet applies
    /// the write on its own schedule, so callers refetch afterwards.
    pub async fn submit(&self, entry: &NewEntry) -> Result<()> {
        entry.validate()?;

        let resp = self
            .http
            .post(&self.api_url)
            .json(entry)
            .send()
            .await
            .context("submit entry")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("submit failed: {status} {body}");
        }
        Ok(())
    }
}
