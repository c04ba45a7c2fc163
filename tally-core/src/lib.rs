//! tally-core: pure aggregation core for the project-ledger dashboard.
//!
//! Everything here is a pure function over caller-owned records: no I/O, no
//! shared state between calls. The record set is replaced wholesale on each
//! reload by the caller; nothing in this crate mutates it.

pub mod filter;
pub mod monthly;
pub mod normalize;
pub mod record;
pub mod summary;

pub use filter::{FilterCriteria, StatusFilter, filter_records, passes};
pub use monthly::{MonthlyBucket, bucket_by_month, monthly_series};
pub use normalize::{format_date, format_money, parse_money};
pub use record::{Record, fields};
pub use summary::{Summary, summarize};
