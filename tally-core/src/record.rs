//! Sheet-row records and fuzzy column lookup.
//!
//! The upstream sheet is human-edited and its column labels drift across
//! versions ("實收 " vs "實收(扣勞健保)"), so there is no fixed schema:
//! aggregation code names the field it wants and [`Record::resolve`] finds
//! the closest column.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Canonical column labels the aggregation logic resolves against.
pub mod fields {
    pub const PROJECT: &str = "專案";
    pub const DATE: &str = "日期";
    pub const TOTAL: &str = "總價";
    pub const RECEIVED: &str = "實收";
    pub const UNPAID: &str = "未收";
    pub const DEPOSIT: &str = "訂金";
    pub const DEPOSIT_DATE: &str = "訂金日期";
    pub const INSTALLMENT: &str = "分期";
    pub const NOTES: &str = "附註";
}

/// One row of the published sheet: column labels paired with raw cell text,
/// in sheet column order. Immutable once built; a reload replaces the whole
/// record set rather than patching rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    columns: Vec<(String, String)>,
}

impl Record {
    pub fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column labels in sheet order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    /// (label, value) pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the column best matching `logical_key`.
    ///
    /// An exact label match wins. Otherwise labels and key are compared with
    /// all whitespace removed, and the first column (in sheet order) whose
    /// stripped label contains the stripped key supplies the value. No match
    /// yields the empty string, never an error: a missing column reads as an
    /// empty cell downstream.
    pub fn resolve(&self, logical_key: &str) -> &str {
        if let Some((_, v)) = self.columns.iter().find(|(k, _)| k == logical_key) {
            return v;
        }

        let wanted = strip_whitespace(logical_key);
        if wanted.is_empty() {
            return "";
        }
        self.columns
            .iter()
            .find(|(k, _)| strip_whitespace(k).contains(&wanted))
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Serializes as a JSON object in column order. Keyword filtering matches
/// against this serialized text, so labels and values both participate.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (k, v) in &self.columns {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
