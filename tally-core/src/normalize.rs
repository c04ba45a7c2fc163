//! Money and date normalization for loosely-typed sheet cells.
//!
//! Cells arrive as human-typed text ("NT$1,200", "2024/1/5", or junk).
//! Every function here degrades instead of failing: unparseable money reads
//! as 0, unparseable dates pass through unchanged.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static NON_MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("money scrub pattern"));

/// Formats tried against date cells, most common sheet style first.
const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Parse a money cell like "NT$1,200" into a number.
///
/// Strips every character that is not a digit, '.' or '-', then parses the
/// remainder. Empty or unparseable input is 0.0; the result is always
/// finite.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned = NON_MONEY.replace_all(raw, "");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Thousands-separated rendering, rounded to cents. No currency symbol;
/// callers prefix "NT$". Integral amounts drop the decimals.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();
    if frac == 0 {
        format!("{sign}{}", group_thousands(whole))
    } else {
        format!("{sign}{}.{frac:02}", group_thousands(whole))
    }
}

/// Render a date cell as zero-padded YYYY/MM/DD.
///
/// Accepts "/" or "-" separated dates with or without padding. Anything
/// unparseable comes back unchanged so the sheet's own text still shows.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return d.format("%Y/%m/%d").to_string();
        }
    }
    raw.to_string()
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
