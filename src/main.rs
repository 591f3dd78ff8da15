use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use wslscraper::{fetch, process, store};

/// Scrape WSL Championship Tour season results into per-season CSV files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// First season to scrape (inclusive).
    #[arg(long, default_value_t = 2010)]
    first_year: u16,

    /// Last season to scrape (inclusive).
    #[arg(long, default_value_t = 2022)]
    last_year: u16,

    /// Seasons to skip entirely (2020 had no tour).
    #[arg(long, value_delimiter = ',', default_value = "2020")]
    skip_years: Vec<u16>,

    /// Directory the per-season CSV files are written to.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)?;
    let client = Client::new();

    let mut failed = 0usize;
    for year in args.first_year..=args.last_year {
        if args.skip_years.contains(&year) {
            info!(year, "skipping season");
            continue;
        }

        info!(year, "scraping season");
        match scrape_season(&client, year, &args.out_dir).await {
            Ok(path) => info!(year, path = %path.display(), "season written"),
            Err(e) => {
                // One bad season never aborts the batch.
                error!(year, "season failed: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        info!(failed, "finished with failed seasons");
    } else {
        info!("all seasons done");
    }
    Ok(())
}

async fn scrape_season(client: &Client, year: u16, out_dir: &Path) -> Result<PathBuf> {
    let html = fetch::fetch_season_page(client, year).await?;
    let table = process::clean_season_table(&html)?;
    store::write_season_csv(&table, year, out_dir)
}
