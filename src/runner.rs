//! Sequential harvest.
//!
//! Targets are processed one at a time: fetch, resolve, extract, write. A
//! target that fails to fetch or yields no script text is skipped; only
//! setup problems and sink failures end the run early.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::crawl::{collect_links, dedupe_preserving_order};
use crate::error::{Error, Result};
use crate::extract::harvest_target;
use crate::net::Fetcher;
use crate::options::Options;
use crate::sink::{read_source_urls, CsvSink, RecordSink};
use crate::url_utils;

/// Run-level settings.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Directory holding the output file. Created if missing.
    pub outdir: PathBuf,
    /// Output file name inside `outdir`.
    pub csv_name: String,
    /// Stop after writing this many rows. `0` means no limit.
    pub max_items: usize,
    /// Crawl only the alphabetical indexes of these letters.
    pub letters: Vec<char>,
    /// Explicit targets; when non-empty no index is crawled.
    pub urls: Vec<String>,
    /// Skip targets already present in the output file.
    pub resume: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("imsdb_out"),
            csv_name: "imsdb_scripts.csv".to_string(),
            max_items: 0,
            letters: Vec::new(),
            urls: Vec::new(),
            resume: false,
        }
    }
}

impl HarvestConfig {
    /// Full path of the output file.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.outdir.join(&self.csv_name)
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows written.
    pub written: usize,
    /// Targets skipped as already present or without script text.
    pub skipped: usize,
    /// Targets whose fetch failed.
    pub failed: usize,
}

/// Harvest into the CSV file described by `config`.
///
/// # Errors
///
/// Returns [`Error::Config`] when the output directory or file cannot be
/// prepared or the base URL is invalid, and sink errors while writing.
pub fn run(fetcher: &dyn Fetcher, config: &HarvestConfig, options: &Options) -> Result<RunSummary> {
    fs::create_dir_all(&config.outdir).map_err(|e| {
        Error::Config(format!("cannot create output directory {}: {e}", config.outdir.display()))
    })?;

    let csv_path = config.csv_path();
    let seen = if config.resume {
        read_source_urls(&csv_path)?
    } else {
        HashSet::new()
    };

    let mut sink = CsvSink::open(&csv_path)
        .map_err(|e| Error::Config(format!("cannot open {}: {e}", csv_path.display())))?;

    let targets = targets(fetcher, config, options)?;
    if targets.is_empty() {
        info!("no targets found");
        return Ok(RunSummary::default());
    }
    info!(count = targets.len(), csv = %csv_path.display(), "harvest starting");

    let summary = harvest(fetcher, &mut sink, &targets, seen, config.max_items, options)?;
    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "harvest done"
    );
    Ok(summary)
}

/// Explicit URLs in order without repeats, or the crawled index links.
///
/// # Errors
///
/// Returns [`Error::Config`] when the base URL is invalid.
pub fn targets(fetcher: &dyn Fetcher, config: &HarvestConfig, options: &Options) -> Result<Vec<Url>> {
    if !config.urls.is_empty() {
        let parsed = config
            .urls
            .iter()
            .filter_map(|raw| match url_utils::parse_url(raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(error = %e, "ignoring target");
                    None
                }
            })
            .collect();
        return Ok(dedupe_preserving_order(parsed));
    }

    let base = url_utils::parse_url(&options.base_url)
        .map_err(|e| Error::Config(format!("base url: {e}")))?;
    info!(base = %base, "collecting script links");
    Ok(collect_links(fetcher, &base, &config.letters))
}

/// Process `targets` in order, writing each usable record to `sink`.
///
/// `seen` holds source URLs that must not be written again; it grows as rows
/// are written.
///
/// # Errors
///
/// Returns sink errors and any error that is not a per-target fetch failure.
pub fn harvest(
    fetcher: &dyn Fetcher,
    sink: &mut dyn RecordSink,
    targets: &[Url],
    mut seen: HashSet<String>,
    max_items: usize,
    options: &Options,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let total = targets.len();

    for (i, target) in targets.iter().enumerate() {
        if max_items > 0 && summary.written >= max_items {
            info!(max_items, "item cap reached");
            break;
        }

        let position = i + 1;
        if seen.contains(target.as_str()) {
            info!(position, total, url = %target, "already harvested");
            summary.skipped += 1;
            continue;
        }

        info!(position, total, url = %target, "fetching");
        let record = match harvest_target(fetcher, target, options) {
            Ok(record) => record,
            Err(e) if e.is_fetch_failure() => {
                warn!(url = %target, error = %e, "fetch failed");
                summary.failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if !record.is_emittable() {
            warn!(url = %target, "no script text detected after follow-ups");
            summary.skipped += 1;
            continue;
        }
        if seen.contains(&record.source_url) {
            info!(url = %record.source_url, "already harvested");
            summary.skipped += 1;
            continue;
        }
        if record.genres.is_empty() {
            info!(url = %record.source_url, "genres not found (some entries lack tags)");
        }

        sink.write(&record)?;
        seen.insert(record.source_url);
        summary.written += 1;
    }

    Ok(summary)
}
