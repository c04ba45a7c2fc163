//! Keyword and payment-status filtering over records.

use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::normalize::parse_money;
use crate::record::{Record, fields};

/// Payment-status facet of the dashboard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    /// Fully collected: nothing outstanding.
    #[serde(rename = "paid")]
    Paid,
    /// Something still outstanding.
    #[serde(rename = "unpaid")]
    Unpaid,
    /// A deposit was taken.
    #[serde(rename = "deposit")]
    Deposit,
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "paid" => Ok(StatusFilter::Paid),
            "unpaid" => Ok(StatusFilter::Unpaid),
            "deposit" => Ok(StatusFilter::Deposit),
            other => bail!("unknown status filter '{other}' (expected all|paid|unpaid|deposit)"),
        }
    }
}

/// Search-box keyword plus status dropdown.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub keyword: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn new(keyword: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            keyword: keyword.into(),
            status,
        }
    }
}

/// Whether `record` survives both the keyword and the status test.
///
/// The keyword is matched case-insensitively against the record's serialized
/// JSON text, so both labels and cell values participate; an empty keyword
/// always passes. The status test then reads the unpaid/deposit amounts
/// through the resolver, so rows missing those columns count as 0.
pub fn passes(record: &Record, criteria: &FilterCriteria) -> bool {
    let keyword = criteria.keyword.trim().to_lowercase();
    if !keyword.is_empty() {
        let text = serde_json::to_string(record)
            .unwrap_or_default()
            .to_lowercase();
        if !text.contains(&keyword) {
            return false;
        }
    }

    match criteria.status {
        StatusFilter::All => true,
        StatusFilter::Paid => parse_money(record.resolve(fields::UNPAID)) <= 0.0,
        StatusFilter::Unpaid => parse_money(record.resolve(fields::UNPAID)) != 0.0,
        StatusFilter::Deposit => parse_money(record.resolve(fields::DEPOSIT)) != 0.0,
    }
}

/// The rows that survive `criteria`, order preserved.
pub fn filter_records(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    records
        .iter()
        .filter(|r| passes(r, criteria))
        .cloned()
        .collect()
}
