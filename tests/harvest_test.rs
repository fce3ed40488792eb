//! Harvest runs against an in-memory site, writing real CSV files.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::fs;

use rs_screenplay::net::StaticFetcher;
use rs_screenplay::runner::{run, HarvestConfig, RunSummary};
use rs_screenplay::sink::{read_records, read_source_urls, CsvSink, RecordSink};
use rs_screenplay::{Options, ScriptRecord};

fn script_page(title: &str) -> String {
    format!(
        r#"<html><head><title>Read "{title}" Script</title></head><body>
        <table><tr><td class="scrtext"><pre>{title}

FADE IN:</pre></td></tr></table></body></html>"#
    )
}

fn config(dir: &tempfile::TempDir, urls: &[&str]) -> HarvestConfig {
    HarvestConfig {
        outdir: dir.path().join("out"),
        csv_name: "scripts.csv".to_string(),
        urls: urls.iter().map(ToString::to_string).collect(),
        ..HarvestConfig::default()
    }
}

#[test]
fn resume_skips_urls_already_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = HarvestConfig {
        resume: true,
        ..config(&dir, &["https://site/scripts/A.html", "https://site/scripts/B.html"])
    };

    fs::create_dir_all(&cfg.outdir).expect("outdir");
    let mut sink = CsvSink::open(&cfg.csv_path()).expect("open csv");
    sink.write(&ScriptRecord {
        source_url: "https://site/scripts/A.html".into(),
        title: "A".into(),
        script_text: "OLD TEXT".into(),
        ..ScriptRecord::default()
    })
    .expect("seed row");
    drop(sink);

    let fetcher = StaticFetcher::new()
        .with_page("https://site/scripts/A.html", &script_page("A"))
        .with_page("https://site/scripts/B.html", &script_page("B"));

    let summary = run(&fetcher, &cfg, &Options::default()).expect("run");

    assert_eq!(summary, RunSummary { written: 1, skipped: 1, failed: 0 });
    let requested: Vec<String> = fetcher.requests().into_iter().map(String::from).collect();
    assert_eq!(requested, vec!["https://site/scripts/B.html"]);

    let records = read_records(&cfg.csv_path()).expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title, "B");
}

#[test]
fn info_page_and_follow_up_are_resolved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(&dir, &["https://imsdb.com/Movie Scripts/Sample Script.html"]);

    let fetcher = StaticFetcher::new()
        .with_page(
            "https://imsdb.com/Movie Scripts/Sample Script.html",
            r#"<title>Sample Script</title><a href="/scripts/Sample.html">Read "Sample" Script</a>"#,
        )
        .with_page(
            "https://imsdb.com/scripts/Sample.html",
            r#"<title>Read "Sample" Script</title><b>Genres</b> <a href="/genre/Drama">Drama</a>
            <table><tr><td class="scrtext"><a href="/scripts/Sample-full.html">Read the HTML version</a></td></tr></table>"#,
        )
        .with_page(
            "https://imsdb.com/scripts/Sample-full.html",
            "<pre>SAMPLE\n\nScreenplay by Jane Doe and John Roe\n\nFADE IN:</pre>",
        );

    let summary = run(&fetcher, &cfg, &Options::default()).expect("run");
    assert_eq!(summary.written, 1);
    assert_eq!(fetcher.requests().len(), 3);

    let records = read_records(&cfg.csv_path()).expect("read csv");
    let record = &records[0];
    assert_eq!(record.title, "Sample");
    assert_eq!(record.source_url, "https://imsdb.com/scripts/Sample-full.html");
    assert_eq!(record.genres, vec!["Drama"]);
    assert_eq!(record.writers, vec!["Jane Doe", "John Roe"]);
}

#[test]
fn failed_follow_up_skips_the_item() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config(&dir, &["https://imsdb.com/scripts/Sample.html"]);

    let fetcher = StaticFetcher::new()
        .with_page(
            "https://imsdb.com/scripts/Sample.html",
            r#"<title>Sample</title><div class="main"><a href="/scripts/Sample-full.html">Read</a></div>"#,
        )
        .with_status("https://imsdb.com/scripts/Sample-full.html", 503, "");

    let summary = run(&fetcher, &cfg, &Options::default()).expect("run");

    assert_eq!(summary, RunSummary { written: 0, skipped: 0, failed: 1 });
    assert!(read_source_urls(&cfg.csv_path()).expect("read urls").is_empty());
}

#[test]
fn writers_and_genres_round_trip_through_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("round.csv");
    let record = ScriptRecord {
        source_url: "https://imsdb.com/scripts/Sample.html".into(),
        title: "Sample".into(),
        writers: vec!["Jane Doe".into(), "John Roe".into()],
        genres: vec!["Drama".into()],
        draft_info: String::new(),
        script_text: "INT. ROOM, \"QUOTED\" - DAY\nline two".into(),
    };

    let mut sink = CsvSink::open(&path).expect("open csv");
    sink.write(&record).expect("write");
    drop(sink);

    let contents = fs::read_to_string(&path).expect("read file");
    assert!(contents.starts_with("title,source_url,writers,genres,draft_info,script_text\n"));
    assert!(contents.contains("Jane Doe|John Roe"));

    let back = read_records(&path).expect("read csv");
    assert_eq!(back, vec![record]);
}

#[test]
fn second_run_appends_without_repeating_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let fetcher = StaticFetcher::new()
        .with_page("https://imsdb.com/scripts/A.html", &script_page("A"))
        .with_page("https://imsdb.com/scripts/B.html", &script_page("B"));

    run(&fetcher, &config(&dir, &["https://imsdb.com/scripts/A.html"]), &Options::default()).expect("first run");
    let cfg = config(&dir, &["https://imsdb.com/scripts/B.html"]);
    run(&fetcher, &cfg, &Options::default()).expect("second run");

    let contents = fs::read_to_string(cfg.csv_path()).expect("read file");
    assert_eq!(contents.matches("title,source_url").count(), 1);
    assert_eq!(read_records(&cfg.csv_path()).expect("read csv").len(), 2);
}

#[test]
fn unwritable_output_dir_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").expect("write blocker");

    let cfg = HarvestConfig {
        outdir: blocker.join("out"),
        ..HarvestConfig::default()
    };

    let result = run(&StaticFetcher::new(), &cfg, &Options::default());
    assert!(matches!(result, Err(rs_screenplay::Error::Config(_))));
}
