//! Configuration for a harness run.
//!
//! Defaults reproduce the conventional layout: inputs under `data/`,
//! outputs under `results/`. A JSON file may override any subset of fields.

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Master configuration for a harness run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Input and output file locations.
    pub paths: PathsConfig,
    /// Run behaviour.
    pub options: RunOptions,
}

/// File locations used by a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Test vectors, header `case_id,a,b,c` (default: data/input.csv).
    pub input: PathBuf,
    /// Expected labels, header `case_id,expected` (default: data/expected.csv).
    pub expected: PathBuf,
    /// Actual labels written by the run (default: results/actual.csv).
    pub actual: PathBuf,
    /// Plain-text report written by the run (default: results/report.txt).
    pub report: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/input.csv"),
            expected: PathBuf::from("data/expected.csv"),
            actual: PathBuf::from("results/actual.csv"),
            report: PathBuf::from("results/report.txt"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Exit with a failure status when any mismatch is found.
    pub strict: bool,
    /// Also write the summary as JSON to this path.
    pub summary_json: Option<PathBuf>,
}

impl HarnessConfig {
    /// Parses a configuration from JSON text. Missing fields keep defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, "configuration")
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| HarnessError::Config(format!("invalid {origin}: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty paths, which would otherwise fail late at open time.
    pub fn validate(&self) -> Result<()> {
        let p = &self.paths;
        for (name, path) in [
            ("input", &p.input),
            ("expected", &p.expected),
            ("actual", &p.actual),
            ("report", &p.report),
        ] {
            if path.as_os_str().is_empty() {
                return Err(HarnessError::Config(format!("paths.{name} is empty")));
            }
        }
        if let Some(json) = &self.options.summary_json {
            if json.as_os_str().is_empty() {
                return Err(HarnessError::Config(
                    "options.summary_json is empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
