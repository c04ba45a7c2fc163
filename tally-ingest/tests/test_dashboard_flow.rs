//! End-to-end regression over the whole pipeline: published CSV text in,
//! filtered rows, summary and monthly buckets out.

use tally_core::{
    FilterCriteria, StatusFilter, bucket_by_month, filter_records, monthly_series, summarize,
};
use tally_ingest::parse_published_csv;

const SHEET: &str = "\
專案,日期,總價,實收 ,未收,訂金,附註
官網改版,2024/1/5,\"NT$15,000\",\"12,000\",\"3,000\",3000,
名片設計,2024-1-20,2500,0,2500,500,急件
社群廣告,2024/2/14,4000,4000,0,0,
年度維護,,12000,8000,0,0,日期待補
小計,,\"33,500\",\"24,000\",\"5,500\",,";

#[test]
fn test_full_pipeline_summary() {
    let records = parse_published_csv(SHEET).unwrap();
    assert_eq!(records.len(), 4);

    let all = filter_records(&records, &FilterCriteria::default());
    let summary = summarize(&all);
    assert_eq!(summary.total_received, 24000.0);
    assert_eq!(summary.total_unpaid, 5500.0);
    // 24000 / 29500 = 81.35..% -> 81
    assert_eq!(summary.completion_percent, 81);
}

#[test]
fn test_header_drift_does_not_break_totals() {
    // The received column is labeled "實收 " (trailing space) in this sheet
    // version; resolution still finds it for every row.
    let records = parse_published_csv(SHEET).unwrap();
    let summary = summarize(&records);
    assert!(summary.total_received > 0.0);
}

#[test]
fn test_unpaid_view_and_its_summary() {
    let records = parse_published_csv(SHEET).unwrap();
    let unpaid = filter_records(&records, &FilterCriteria::new("", StatusFilter::Unpaid));

    let names: Vec<&str> = unpaid.iter().map(|r| r.resolve("專案")).collect();
    assert_eq!(names, vec!["名片設計", "官網改版"]);

    let summary = summarize(&unpaid);
    assert_eq!(summary.total_unpaid, 5500.0);
}

#[test]
fn test_keyword_narrows_before_status() {
    let records = parse_published_csv(SHEET).unwrap();
    let hits = filter_records(&records, &FilterCriteria::new("官網", StatusFilter::Unpaid));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].resolve("專案"), "官網改版");
}

#[test]
fn test_monthly_buckets_from_sheet() {
    let records = parse_published_csv(SHEET).unwrap();
    let buckets = bucket_by_month(&records);

    // Mixed "/" and "-" separators land in the same January bucket; the row
    // with an empty date is excluded, not defaulted.
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets["2024-01"], 12000.0);
    assert_eq!(buckets["2024-02"], 4000.0);

    let series = monthly_series(&buckets, 12);
    let keys: Vec<&str> = series.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["2024-01", "2024-02"]);
}
