//! Plain-text rendering of records, summary and monthly series. The core
//! hands over pure data; everything presentation-shaped lives here.

use std::sync::LazyLock;

use regex::Regex;
use tally_core::{Record, Summary, fields, format_date, format_money};

/// Cells shaped like numbers get right-aligned, same shape the web table
/// used for its num-right class.
static NUMERIC_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,.\-]+$").expect("numeric cell pattern"));

const BAR_WIDTH: f64 = 40.0;

/// Print records as a table. Column labels come from the first row; date
/// columns are canonicalized to YYYY/MM/DD on the way out.
pub fn print_table(records: &[Record]) {
    let Some(first) = records.first() else {
        println!("(no entries)");
        return;
    };
    let labels: Vec<&str> = first.labels().collect();

    let table: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            labels
                .iter()
                .map(|label| {
                    let cell = r.resolve(label);
                    if is_date_label(label) {
                        format_date(cell)
                    } else {
                        cell.to_string()
                    }
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in &table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    println!("{}", format_row(&labels, &widths, |_| false));
    for row in &table {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        let line = format_row(&cells, &widths, |cell| NUMERIC_CELL.is_match(cell.trim()));
        println!("{line}");
    }
}

pub fn print_summary(summary: &Summary) {
    println!("Received: NT$ {}", format_money(summary.total_received));
    println!("Unpaid:   NT$ {}", format_money(summary.total_unpaid));
    println!("Done:     {}%", summary.completion_percent);
}

/// One line per month, oldest first, with a proportional bar.
pub fn print_monthly(series: &[(String, f64)]) {
    if series.is_empty() {
        println!("(no dated entries)");
        return;
    }
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    for (month, amount) in series {
        let bar = if max > 0.0 {
            "#".repeat((amount / max * BAR_WIDTH).round() as usize)
        } else {
            String::new()
        };
        println!("{month}  {:>12}  {bar}", format_money(*amount));
    }
}

fn is_date_label(label: &str) -> bool {
    let stripped: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.contains(fields::DATE)
}

fn format_row(cells: &[&str], widths: &[usize], right_align: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let pad = widths[i].saturating_sub(cell.chars().count());
        if right_align(cell) {
            out.push_str(&" ".repeat(pad));
            out.push_str(cell);
        } else {
            out.push_str(cell);
            out.push_str(&" ".repeat(pad));
        }
    }
    out.trim_end().to_string()
}
