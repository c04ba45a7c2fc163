//! The submission payload for a new ledger entry.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// The four fields the add form collects. All go over the wire as text; the
/// sheet itself is the system of record and applies its own typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub date: String,
    pub project: String,
    pub total: String,
    pub income: String,
}

impl NewEntry {
    /// The one input contract: every field is non-empty. Anything beyond
    /// that (number shapes, date shapes) is the sheet's business.
    pub fn validate(&self) -> Result<()> {
        if self.date.trim().is_empty()
            || self.project.trim().is_empty()
            || self.total.trim().is_empty()
            || self.income.trim().is_empty()
        {
            bail!("date, project, total and income are all required");
        }
        Ok(())
    }
}
