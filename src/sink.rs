//! Tabular output.
//!
//! Rows go to an append-only CSV file with the columns
//! `title, source_url, writers, genres, draft_info, script_text`. List fields
//! are pipe-joined. The header is written only when the file is new or empty,
//! so a resumed run keeps appending to the same table.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::result::ScriptRecord;

/// Separator used for list fields.
pub const LIST_SEPARATOR: char = '|';

/// Destination for finished records.
pub trait RecordSink {
    /// Persist one record.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written.
    fn write(&mut self, record: &ScriptRecord) -> Result<()>;
}

impl RecordSink for Vec<ScriptRecord> {
    fn write(&mut self, record: &ScriptRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// One CSV row; column order follows field order.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    source_url: String,
    writers: String,
    genres: String,
    draft_info: String,
    script_text: String,
}

impl From<&ScriptRecord> for CsvRow {
    fn from(record: &ScriptRecord) -> Self {
        Self {
            title: record.title.clone(),
            source_url: record.source_url.clone(),
            writers: join_list(&record.writers),
            genres: join_list(&record.genres),
            draft_info: record.draft_info.clone(),
            script_text: record.script_text.clone(),
        }
    }
}

impl From<CsvRow> for ScriptRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            source_url: row.source_url,
            title: row.title,
            writers: split_list(&row.writers),
            genres: split_list(&row.genres),
            draft_info: row.draft_info,
            script_text: row.script_text,
        }
    }
}

fn join_list(items: &[String]) -> String {
    items.join(&LIST_SEPARATOR.to_string())
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Append-only CSV sink. Each row is flushed as soon as it is written.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_empty = file.metadata()?.len() == 0;

        let writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);

        Ok(Self { writer })
    }
}

impl RecordSink for CsvSink {
    fn write(&mut self, record: &ScriptRecord) -> Result<()> {
        self.writer.serialize(CsvRow::from(record))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Every record stored in the CSV file at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or a row is malformed.
pub fn read_records(path: &Path) -> Result<Vec<ScriptRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(ScriptRecord::from(row?));
    }
    Ok(records)
}

/// `source_url` values already present in the CSV file at `path`.
///
/// A missing file yields an empty set. Unreadable rows are skipped.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be opened or has no
/// readable header.
pub fn read_source_urls(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let column = reader.headers()?.iter().position(|h| h == "source_url");
    let Some(column) = column else {
        return Ok(HashSet::new());
    };

    Ok(reader
        .records()
        .filter_map(std::result::Result::ok)
        .filter_map(|row| row.get(column).map(str::trim).map(ToString::to_string))
        .filter(|url| !url.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> ScriptRecord {
        ScriptRecord {
            source_url: url.to_string(),
            title: "Sample".into(),
            writers: vec!["Jane Doe".into(), "John Roe".into()],
            genres: vec!["Drama".into()],
            draft_info: "1998 Draft".into(),
            script_text: "FADE IN:\n\n\"Hello,\" she said.\n".into(),
        }
    }

    #[test]
    fn list_fields_are_pipe_joined() {
        let row = CsvRow::from(&record("https://imsdb.com/scripts/A.html"));
        assert_eq!(row.writers, "Jane Doe|John Roe");
        assert_eq!(row.genres, "Drama");
    }

    #[test]
    fn empty_list_round_trips_to_empty() {
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(join_list(&[]), "");
    }

    #[test]
    fn header_written_once_across_opens() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("scripts.csv");

        for url in ["https://imsdb.com/scripts/A.html", "https://imsdb.com/scripts/B.html"] {
            let mut sink = CsvSink::open(&path).unwrap_or_else(|e| panic!("{e}"));
            sink.write(&record(url)).unwrap_or_else(|e| panic!("{e}"));
        }

        let contents = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(contents.matches("title,source_url").count(), 1);

        let records = read_records(&path).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source_url, "https://imsdb.com/scripts/B.html");
        assert_eq!(records[0].script_text, record("x").script_text);
    }

    #[test]
    fn missing_file_has_no_urls() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let urls = read_source_urls(&dir.path().join("absent.csv")).unwrap_or_else(|e| panic!("{e}"));
        assert!(urls.is_empty());
    }
}
