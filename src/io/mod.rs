//! CSV and report file I/O around the classifier and runner.
//!
//! Fields are read as written: case ids and expected labels keep their exact
//! bytes, and only side lengths are parsed (as `f64`, ignoring surrounding
//! whitespace). Writers create missing parent directories.

use crate::classify::{ClassificationResult, TestVector};
use crate::error::{HarnessError, Result};
use crate::runner::report::render_report;
use crate::runner::{ExpectedMap, RunSummary};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Header of the actual-results file.
pub const ACTUAL_HEADER: [&str; 2] = ["case_id", "actual"];

#[derive(Debug, Deserialize)]
struct InputRow {
    case_id: String,
    a: String,
    b: String,
    c: String,
}

#[derive(Debug, Deserialize)]
struct ExpectedRow {
    case_id: String,
    expected: String,
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> HarnessError + '_ {
    move |source| HarnessError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
}

fn parse_side(case_id: &str, column: &'static str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        warn!(case_id = %case_id, column, value = %value, "Side length is not a number");
        HarnessError::InvalidNumber {
            case_id: case_id.to_string(),
            column,
            value: value.to_string(),
        }
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Parses test vectors from CSV with header `case_id,a,b,c`.
///
/// `source` is only used to label errors.
pub fn parse_vectors<R: Read>(reader: R, source: &Path) -> Result<Vec<TestVector>> {
    let mut rdr = csv_reader(reader);
    let mut vectors = Vec::new();
    for row in rdr.deserialize::<InputRow>() {
        let row = row.map_err(csv_error(source))?;
        let a = parse_side(&row.case_id, "a", &row.a)?;
        let b = parse_side(&row.case_id, "b", &row.b)?;
        let c = parse_side(&row.case_id, "c", &row.c)?;
        vectors.push(TestVector::new(row.case_id, a, b, c));
    }
    Ok(vectors)
}

/// Parses expected labels from CSV with header `case_id,expected`.
///
/// Label text is not validated here; text naming no label simply never
/// matches. A repeated case id keeps the last label seen.
pub fn parse_expected<R: Read>(reader: R, source: &Path) -> Result<ExpectedMap> {
    let mut rdr = csv_reader(reader);
    let mut expected = ExpectedMap::new();
    for row in rdr.deserialize::<ExpectedRow>() {
        let row = row.map_err(csv_error(source))?;
        if expected.insert(row.case_id.clone(), row.expected).is_some() {
            warn!(case_id = %row.case_id, "Duplicate expected entry; keeping the last one");
        }
    }
    Ok(expected)
}

/// Reads the input batch from `path`.
pub fn read_vectors<P: AsRef<Path>>(path: P) -> Result<Vec<TestVector>> {
    let path = path.as_ref();
    let vectors = parse_vectors(File::open(path)?, path)?;
    debug!(path = %path.display(), rows = vectors.len(), "Read input vectors");
    Ok(vectors)
}

/// Reads the expected labels from `path`.
pub fn read_expected<P: AsRef<Path>>(path: P) -> Result<ExpectedMap> {
    let path = path.as_ref();
    let expected = parse_expected(File::open(path)?, path)?;
    debug!(path = %path.display(), rows = expected.len(), "Read expected labels");
    Ok(expected)
}

/// Writes actual results in input order under a `case_id,actual` header.
pub fn write_actual<P: AsRef<Path>>(path: P, results: &[ClassificationResult]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path).map_err(csv_error(path))?;
    wtr.write_record(ACTUAL_HEADER).map_err(csv_error(path))?;
    for result in results {
        wtr.write_record([result.case_id.as_str(), result.label.as_str()])
            .map_err(csv_error(path))?;
    }
    wtr.flush()?;
    debug!(path = %path.display(), rows = results.len(), "Wrote actual results");
    Ok(())
}

/// Writes the plain-text report.
pub fn write_report<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, render_report(summary))?;
    debug!(path = %path.display(), "Wrote report");
    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn write_summary_json<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "Wrote JSON summary");
    Ok(())
}
