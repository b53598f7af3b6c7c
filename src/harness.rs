//! The file-backed pipeline: read, classify, write, compare, report.

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::io;
use crate::runner::{run_batch, BatchRun};
use tracing::info;

/// Runs the full harness described by `config`.
///
/// Reads the input and expected files, writes the actual-results CSV and the
/// text report (plus the JSON summary when configured), and returns the run.
pub fn run(config: &HarnessConfig) -> Result<BatchRun> {
    config.validate()?;
    let paths = &config.paths;

    let vectors = io::read_vectors(&paths.input)?;
    let expected = io::read_expected(&paths.expected)?;

    let run = run_batch(&vectors, &expected);

    io::write_actual(&paths.actual, &run.results)?;
    io::write_report(&paths.report, &run.summary)?;
    if let Some(json) = &config.options.summary_json {
        io::write_summary_json(json, &run.summary)?;
    }

    info!(
        actual = %paths.actual.display(),
        report = %paths.report.display(),
        "Harness outputs written"
    );
    Ok(run)
}
