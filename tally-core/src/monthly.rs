//! Month-keyed received totals for the dashboard chart.

use std::collections::HashMap;

use crate::normalize::parse_money;
use crate::record::{Record, fields};

/// Received amount summed per "YYYY-MM" key.
pub type MonthlyBucket = HashMap<String, f64>;

/// Group received amounts by calendar month of the date cell.
///
/// Dates may use "/" or "-" separators and unpadded parts; only the year and
/// month components matter. Rows whose date cell does not yield a numeric
/// year and month ("", "N/A", free text) are left out of every bucket rather
/// than landing in a default one.
pub fn bucket_by_month(records: &[Record]) -> MonthlyBucket {
    let mut buckets = MonthlyBucket::new();
    for r in records {
        let date = r.resolve(fields::DATE).replace('-', "/");
        let mut parts = date.split('/').map(str::trim);
        let year = parts.next().and_then(|p| p.parse::<i32>().ok());
        let month = parts.next().and_then(|p| p.parse::<u32>().ok());
        let (Some(year), Some(month)) = (year, month) else {
            continue;
        };

        let key = format!("{year}-{month:02}");
        *buckets.entry(key).or_insert(0.0) += parse_money(r.resolve(fields::RECEIVED));
    }
    buckets
}

/// Chronologically sorted buckets, trimmed to the trailing `window` months.
///
/// Lexicographic order of "YYYY-MM" keys is chronological, so a plain key
/// sort suffices.
pub fn monthly_series(buckets: &MonthlyBucket, window: usize) -> Vec<(String, f64)> {
    let mut series: Vec<(String, f64)> = buckets.iter().map(|(k, v)| (k.clone(), *v)).collect();
    series.sort_by(|a, b| a.0.cmp(&b.0));
    if series.len() > window {
        series.drain(..series.len() - window);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, received: &str) -> Record {
        Record::new(vec![
            ("日期".to_string(), date.to_string()),
            ("實收".to_string(), received.to_string()),
        ])
    }

    #[test]
    fn test_slash_and_dash_dates_share_a_bucket() {
        let rows = vec![row("2024/1/5", "1000"), row("2024-01-20", "NT$2,000")];
        let buckets = bucket_by_month(&rows);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets["2024-01"], 3000.0);
    }

    #[test]
    fn test_month_is_zero_padded() {
        let buckets = bucket_by_month(&[row("2024/9/1", "500")]);
        assert!(buckets.contains_key("2024-09"));
    }

    #[test]
    fn test_malformed_dates_are_excluded() {
        let rows = vec![
            row("", "1000"),
            row("N/A", "1000"),
            row("someday", "1000"),
            row("2024/2/2", "700"),
        ];
        let buckets = bucket_by_month(&rows);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets["2024-02"], 700.0);
    }

    #[test]
    fn test_missing_date_column_is_excluded() {
        let r = Record::new(vec![("實收".to_string(), "1000".to_string())]);
        assert!(bucket_by_month(&[r]).is_empty());
    }

    #[test]
    fn test_series_is_sorted_chronologically() {
        let rows = vec![
            row("2024/3/1", "300"),
            row("2023/12/1", "100"),
            row("2024/1/1", "200"),
        ];
        let series = monthly_series(&bucket_by_month(&rows), 12);
        let keys: Vec<&str> = series.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_series_trailing_window() {
        let rows: Vec<Record> = (1..=12)
            .map(|m| row(&format!("2024/{m}/1"), "100"))
            .collect();
        let series = monthly_series(&bucket_by_month(&rows), 3);
        let keys: Vec<&str> = series.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2024-10", "2024-11", "2024-12"]);
    }
}
