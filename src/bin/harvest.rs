//! Harvest scripts from the archive into a CSV file.
//!
//! ```text
//! harvest --letters AB --max 20 --resume
//! harvest --urls "https://imsdb.com/Movie Scripts/Heat Script.html"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rs_screenplay::net::HttpFetcher;
use rs_screenplay::runner::{self, HarvestConfig};
use rs_screenplay::{Options, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

#[derive(Parser)]
#[command(name = "harvest", about = "Scrape a script archive and export full scripts to CSV")]
struct Cli {
    /// Output folder
    #[arg(long, default_value = "imsdb_out")]
    outdir: PathBuf,

    /// CSV file name inside the output folder
    #[arg(long, default_value = "imsdb_scripts.csv")]
    csv: String,

    /// Seconds to wait after every request
    #[arg(long, default_value_t = 1.5)]
    delay: f64,

    /// Max number of scripts to write (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max: usize,

    /// Only crawl titles starting with these letters (e.g. ASZ)
    #[arg(long, default_value = "")]
    letters: String,

    /// Explicit pages to fetch (script or info pages) instead of crawling
    #[arg(long, num_args = 1..)]
    urls: Vec<String>,

    /// Skip pages already present in the CSV (by source_url)
    #[arg(long)]
    resume: bool,

    /// Attempts per request
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Site root for index pages
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "rs_screenplay=debug,harvest=debug"
    } else {
        "rs_screenplay=info,harvest=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let delay = Duration::try_from_secs_f64(cli.delay)
        .with_context(|| format!("invalid --delay {}", cli.delay))?;

    let options = Options {
        base_url: cli.base_url,
        delay,
        retries: cli.retries,
        timeout: Duration::from_secs(cli.timeout),
        user_agent: cli.user_agent,
        ..Options::default()
    };

    let config = HarvestConfig {
        outdir: cli.outdir,
        csv_name: cli.csv,
        max_items: cli.max,
        letters: cli.letters.chars().filter(char::is_ascii_alphanumeric).collect(),
        urls: cli.urls,
        resume: cli.resume,
    };

    let fetcher = HttpFetcher::new(&options).context("building HTTP client")?;
    let summary = runner::run(&fetcher, &config, &options)
        .with_context(|| format!("harvest into {} failed", config.csv_path().display()))?;

    tracing::info!(
        written = summary.written,
        csv = %config.csv_path().display(),
        "done"
    );
    Ok(())
}
