use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use tally_core::{FilterCriteria, Record, bucket_by_month, filter_records, monthly_series, summarize};
use tally_ingest::parse_published_csv;
use tally_remote::{NewEntry, SheetClient};

mod config;
mod render;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Project-ledger dashboard over a published sheet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default ~/.tally/config.toml
    Init,

    /// Fetch, filter and print the ledger with its summary footer
    Show {
        /// Case-insensitive keyword matched against whole rows
        #[arg(long, default_value = "")]
        keyword: String,

        /// all | paid | unpaid | deposit
        #[arg(long, default_value = "all")]
        status: String,

        /// Read a local CSV export instead of fetching the published sheet
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Emit the filtered rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print only the received/unpaid totals and completion percentage
    Summary {
        #[arg(long, default_value = "")]
        keyword: String,

        #[arg(long, default_value = "all")]
        status: String,

        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Received amount per month, oldest to newest
    Monthly {
        /// How many trailing months to keep (default: 12)
        #[arg(long, default_value_t = 12)]
        window: usize,

        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Submit a new entry to the sheet's write endpoint
    Add {
        #[arg(long)]
        date: String,

        #[arg(long)]
        project: String,

        #[arg(long)]
        total: String,

        #[arg(long)]
        income: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Show {
            keyword,
            status,
            csv,
            json,
        } => {
            let records = load_records(csv).await?;
            let criteria = FilterCriteria::new(keyword, status.parse()?);
            let rows = filter_records(&records, &criteria);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                render::print_table(&rows);
                println!();
                render::print_summary(&summarize(&rows));
            }
        }

        Command::Summary {
            keyword,
            status,
            csv,
        } => {
            let records = load_records(csv).await?;
            let criteria = FilterCriteria::new(keyword, status.parse()?);
            let rows = filter_records(&records, &criteria);
            render::print_summary(&summarize(&rows));
        }

        Command::Monthly { window, csv } => {
            let records = load_records(csv).await?;
            let series = monthly_series(&bucket_by_month(&records), window);
            render::print_monthly(&series);
        }

        Command::Add {
            date,
            project,
            total,
            income,
        } => {
            let cfg = config::load_config()?;
            if cfg.sheet.api_url.is_empty() {
                bail!(
                    "sheet.api_url is not set; run `tally init` and edit {}",
                    config::config_path()?.display()
                );
            }
            let client = sheet_client(&cfg)?;

            let entry = NewEntry {
                date,
                project,
                total,
                income,
            };
            client.submit(&entry).await?;
            println!("Entry submitted; waiting for the sheet to apply it...");

            // The published CSV lags the write by a moment.
            tokio::time::sleep(Duration::from_millis(1200)).await;
            let records = client.fetch_records().await?;
            println!("Sheet now has {} entries", records.len());
        }
    }

    Ok(())
}

/// Load the record set: a local export if `--csv` was given, otherwise the
/// configured published-sheet URL. Either way the whole set is rebuilt.
async fn load_records(csv: Option<PathBuf>) -> Result<Vec<Record>> {
    match csv {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            parse_published_csv(&text)
        }
        None => {
            let cfg = config::load_config()?;
            let client = sheet_client(&cfg)?;
            client.fetch_records().await
        }
    }
}

fn sheet_client(cfg: &config::Config) -> Result<SheetClient> {
    if cfg.sheet.csv_url.is_empty() {
        bail!(
            "sheet.csv_url is not set; run `tally init` and edit {}",
            config::config_path()?.display()
        );
    }
    Ok(SheetClient::new(&cfg.sheet.csv_url, &cfg.sheet.api_url))
}
