//! Batch runner: classify a batch, diff it against expected labels, summarize.
//!
//! The runner is a single pass with no early exit. Every case is classified
//! and compared even after the first mismatch, and mismatches keep input
//! order.

pub mod report;

use crate::classify::paths::{covered_paths, BasisPath};
use crate::classify::{classify_batch, ClassificationResult, Label, TestVector};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Rendering of an expected label that is absent for a case id.
pub const MISSING_SENTINEL: &str = "<missing>";

/// Expected label text per case id, kept exactly as read.
pub type ExpectedMap = HashMap<String, String>;

/// The expected side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expected {
    Known(Label),
    /// Text that names no label. Never equal to any actual label.
    Unknown(String),
    /// No expected entry for the case id. Never equal to any actual label.
    Missing,
}

impl Expected {
    /// Interprets expected text byte-for-byte: `"isosceles"` or `" SCALENE"`
    /// are [`Expected::Unknown`].
    pub fn from_text(text: &str) -> Self {
        text.parse::<Label>()
            .map_or_else(|_| Expected::Unknown(text.to_string()), Expected::Known)
    }

    pub fn lookup(expected: &ExpectedMap, case_id: &str) -> Self {
        expected
            .get(case_id)
            .map_or(Expected::Missing, |text| Expected::from_text(text))
    }

    pub fn matches(&self, actual: Label) -> bool {
        matches!(self, Expected::Known(label) if *label == actual)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Known(label) => label.fmt(f),
            Expected::Unknown(text) => f.write_str(text),
            Expected::Missing => f.write_str(MISSING_SENTINEL),
        }
    }
}

impl Serialize for Expected {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A case whose actual label differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub case_id: String,
    pub expected: Expected,
    pub actual: Label,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.case_id, self.expected, self.actual
        )
    }
}

/// Outcome of comparing a batch against its expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub failures: usize,
    pub mismatches: Vec<Mismatch>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.total - self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }

    /// Mismatch lines in detection order.
    pub fn mismatch_lines(&self) -> Vec<String> {
        self.mismatches.iter().map(ToString::to_string).collect()
    }
}

/// Compares `results` against `expected`, in result order.
pub fn compare(results: &[ClassificationResult], expected: &ExpectedMap) -> RunSummary {
    let mut mismatches = Vec::new();
    for result in results {
        let exp = Expected::lookup(expected, &result.case_id);
        match &exp {
            Expected::Missing => warn!(case_id = %result.case_id, "No expected label for case"),
            Expected::Unknown(text) => {
                warn!(case_id = %result.case_id, expected = %text, "Expected text is not a label")
            }
            Expected::Known(_) => {}
        }
        if !exp.matches(result.label) {
            let mismatch = Mismatch {
                case_id: result.case_id.clone(),
                expected: exp,
                actual: result.label,
            };
            debug!(%mismatch, "Mismatch");
            mismatches.push(mismatch);
        }
    }

    RunSummary {
        total: results.len(),
        failures: mismatches.len(),
        mismatches,
    }
}

/// Actual results of a batch together with their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRun {
    pub results: Vec<ClassificationResult>,
    pub summary: RunSummary,
}

impl BatchRun {
    /// Basis paths exercised by the actual labels of this run.
    pub fn covered_paths(&self) -> Vec<BasisPath> {
        covered_paths(self.results.iter().map(|r| r.label))
    }
}

/// Classifies `vectors` and compares the results against `expected`.
pub fn run_batch(vectors: &[TestVector], expected: &ExpectedMap) -> BatchRun {
    let span = crate::span_trace!("run_batch", total = vectors.len());
    let _guard = span.enter();

    let results = classify_batch(vectors);
    let summary = compare(&results, expected);
    let run = BatchRun { results, summary };

    info!(
        total = run.summary.total,
        failures = run.summary.failures,
        paths_covered = run.covered_paths().len(),
        paths_total = BasisPath::ALL.len(),
        "Batch compared"
    );

    run
}
