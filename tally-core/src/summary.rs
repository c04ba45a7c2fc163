//! Received/unpaid totals and completion percentage.

use serde::{Deserialize, Serialize};

use crate::normalize::parse_money;
use crate::record::{Record, fields};

/// Headline numbers for a (usually filtered) set of rows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_received: f64,
    pub total_unpaid: f64,
    /// 0-100. Renderers append the '%' sign; the core keeps the bare
    /// integer, and 0 also covers the nothing-billed-yet case.
    pub completion_percent: u8,
}

/// Sum received and unpaid amounts over `records`.
///
/// Rows missing either column contribute 0 instead of being dropped, so the
/// totals always cover every row given.
pub fn summarize(records: &[Record]) -> Summary {
    let mut total_received = 0.0;
    let mut total_unpaid = 0.0;
    for r in records {
        total_received += parse_money(r.resolve(fields::RECEIVED));
        total_unpaid += parse_money(r.resolve(fields::UNPAID));
    }

    let billed = total_received + total_unpaid;
    let completion_percent = if billed == 0.0 {
        0
    } else {
        (total_received / billed * 100.0).round().clamp(0.0, 100.0) as u8
    };

    Summary {
        total_received,
        total_unpaid,
        completion_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(received: &str, unpaid: &str) -> Record {
        Record::new(vec![
            ("專案".to_string(), "案子".to_string()),
            ("實收".to_string(), received.to_string()),
            ("未收".to_string(), unpaid.to_string()),
        ])
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let s = summarize(&[]);
        assert_eq!(s.total_received, 0.0);
        assert_eq!(s.total_unpaid, 0.0);
        assert_eq!(s.completion_percent, 0);
    }

    #[test]
    fn test_totals_and_percent() {
        let rows = vec![row("1000", "0"), row("2000", "1000")];
        let s = summarize(&rows);
        assert_eq!(s.total_received, 3000.0);
        assert_eq!(s.total_unpaid, 1000.0);
        assert_eq!(s.completion_percent, 75);
    }

    #[test]
    fn test_percent_rounds() {
        // 1000 / 3000 = 33.33..% -> 33
        let s = summarize(&[row("1000", "2000")]);
        assert_eq!(s.completion_percent, 33);
        // 2000 / 3000 = 66.66..% -> 67
        let s = summarize(&[row("2000", "1000")]);
        assert_eq!(s.completion_percent, 67);
    }

    #[test]
    fn test_missing_columns_count_as_zero() {
        let rows = vec![
            row("NT$1,200", "300"),
            Record::new(vec![("專案".to_string(), "無金額".to_string())]),
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_received, 1200.0);
        assert_eq!(s.total_unpaid, 300.0);
    }

    #[test]
    fn test_all_unpaid_is_zero_percent() {
        let s = summarize(&[row("0", "5000")]);
        assert_eq!(s.completion_percent, 0);
    }
}
