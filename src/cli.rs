//! Command-line interface for the `basispath` binary.

use crate::config::HarnessConfig;
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Triangle classifier with a basis path test harness")]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long = "json-log", global = true, default_value_t = false)]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify the input batch, diff against expected labels and report.
    Run(RunArgs),
    /// Print `case_id: LABEL` for every input row.
    Classify(ClassifyArgs),
    /// List the basis paths with their canonical vectors.
    Paths,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// JSON configuration file; flags below override it.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input CSV (case_id,a,b,c).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Expected CSV (case_id,expected).
    #[arg(long, value_name = "FILE")]
    pub expected: Option<PathBuf>,

    /// Where to write actual results.
    #[arg(long, value_name = "FILE")]
    pub actual: Option<PathBuf>,

    /// Where to write the text report.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Also write the summary as JSON.
    #[arg(long = "summary-json", value_name = "FILE")]
    pub summary_json: Option<PathBuf>,

    /// Exit with status 1 when any case fails.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl RunArgs {
    /// Builds the effective configuration: file (or defaults), then flags.
    pub fn resolve_config(&self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::from_json_file(path)?,
            None => HarnessConfig::default(),
        };
        let paths = &mut config.paths;
        if let Some(p) = &self.input {
            paths.input = p.clone();
        }
        if let Some(p) = &self.expected {
            paths.expected = p.clone();
        }
        if let Some(p) = &self.actual {
            paths.actual = p.clone();
        }
        if let Some(p) = &self.report {
            paths.report = p.clone();
        }
        if self.summary_json.is_some() {
            config.options.summary_json = self.summary_json.clone();
        }
        config.options.strict |= self.strict;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Input CSV (case_id,a,b,c).
    #[arg(long, value_name = "FILE", default_value = "data/input.csv")]
    pub input: PathBuf,
}
