//! Reads a script page from stdin and prints its record as JSON.
//!
//! The page URL is the only argument; it is used to resolve relative links.
//! No network access: follow-up links are reported but not fetched.
//!
//! ```text
//! curl -s https://imsdb.com/scripts/Heat.html | extract_stdin https://imsdb.com/scripts/Heat.html
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use rs_screenplay::extract_bytes;
use rs_screenplay::url_utils::parse_url;

#[derive(Parser)]
#[command(name = "extract_stdin", about = "Extract one script record from HTML on stdin")]
struct Cli {
    /// URL the page was fetched from
    url: String,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = parse_url(&cli.url).context("page url")?;

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .context("failed to read from stdin")?;

    let record = extract_bytes(&html, &url);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    println!("{json}");
    Ok(())
}
